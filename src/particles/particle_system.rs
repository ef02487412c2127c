use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::particles::emission::{spawn_particle, spawn_ring, EmissionTimer};
use crate::particles::particle::FrameParams;
use crate::particles::{
    Angle, Color, EmitterConfig, Particle, RenderTarget, Sprite, TextureHandle,
};

/// Particle engine update result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleUpdate {
    /// Particles spawned by continuous emission this frame
    pub spawned: usize,
    /// Particles removed this frame
    pub retired: usize,
    /// Live particles after the update
    pub active_particles: usize,
}

/// 2D particle emitter
///
/// Owns the live particles, the emission parameters and the visual template
/// every new particle is cloned from. Driven once per frame by `update`
/// followed by `draw`.
pub struct ParticleEngine<R: Rng = StdRng> {
    /// Live particles in spawn order
    particles: Vec<Particle>,
    config: EmitterConfig,
    /// Visual template cloned onto each new particle
    template: Sprite,
    timer: EmissionTimer,
    rng: R,
}

impl ParticleEngine<StdRng> {
    /// Create an engine with default parameters and an entropy-seeded RNG
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a deterministic engine
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ParticleEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ParticleEngine<R> {
    /// Create an engine drawing randomness from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut engine = Self {
            particles: Vec::new(),
            config: EmitterConfig::default(),
            template: Sprite::new(),
            timer: EmissionTimer::new(),
            rng,
        };
        engine.set_particle_size(engine.config.particle_size);
        engine
    }

    /// Bind the texture every new particle is drawn with
    ///
    /// The particle size is reset to the texture's native size, so call
    /// `set_particle_size` afterwards to render at a different size.
    pub fn set_texture(&mut self, texture: TextureHandle) {
        self.template.set_texture(texture);
        self.set_particle_size(texture.size.as_vec2());
    }

    /// Set the color of new particles
    pub fn set_color(&mut self, color: Color) {
        self.config.color = color;
        self.template.set_color(color);
    }

    /// Set the rendered size of new particles, independent of texture resolution
    pub fn set_particle_size(&mut self, size: Vec2) {
        self.config.particle_size = size;
        self.template.fit_to_size(size);
        self.template.set_origin(size * 0.5);
    }

    /// Set the point of emission. Default is (0, 0)
    pub fn set_emitter(&mut self, emitter: Vec2) {
        self.config.emitter = emitter;
    }

    /// Set the mean direction of emission. Default is 0
    pub fn set_direction(&mut self, direction: Angle) {
        self.config.direction = direction;
    }

    /// Set the full angular spread of emission
    ///
    /// With direction 0° and dispersion 90°, particles leave between -45°
    /// and 45°.
    pub fn set_dispersion(&mut self, dispersion: Angle) {
        self.config.dispersion = dispersion;
    }

    /// Set the particle speed. Negative values are folded to positive
    pub fn set_velocity(&mut self, velocity: f32) {
        self.config.velocity = velocity.abs();
    }

    /// Set particles spawned per second. Negative values are folded to positive
    pub fn set_respawn_rate(&mut self, rate: f32) {
        self.config.respawn_rate = rate.abs();
    }

    /// Set the extents of the spawn jitter rectangle
    pub fn set_respawn_area(&mut self, area: Vec2) {
        self.config.respawn_area = area;
    }

    /// Set the maximum sampled lifetime. Negative values are folded to positive
    ///
    /// Every particle lives at least one second on top of the sampled value.
    pub fn set_lifetime(&mut self, lifetime: f32) {
        self.config.lifetime = lifetime.abs();
    }

    /// Set the per-frame scale multiplier. Default is (1, 1)
    pub fn set_exponential_growth(&mut self, factors: Vec2) {
        self.config.exponential_growth = factors;
    }

    /// Enable or disable continuous emission
    pub fn set_emitted(&mut self, emitted: bool) {
        self.config.emitted = emitted;
    }

    /// Enable or disable alpha fading over lifetime
    pub fn set_attenuated(&mut self, attenuated: bool) {
        self.config.attenuated = attenuated;
    }

    /// Apply every value of a preset through the setters
    pub fn apply_config(&mut self, config: &EmitterConfig) {
        self.set_particle_size(config.particle_size);
        self.set_emitter(config.emitter);
        self.set_direction(config.direction);
        self.set_dispersion(config.dispersion);
        self.set_velocity(config.velocity);
        self.set_respawn_rate(config.respawn_rate);
        self.set_respawn_area(config.respawn_area);
        self.set_lifetime(config.lifetime);
        self.set_exponential_growth(config.exponential_growth);
        self.set_emitted(config.emitted);
        self.set_attenuated(config.attenuated);
        self.set_color(config.color);

        log::debug!("Applied emitter config: {:?}", self.config);
    }

    /// Burst a ring of particles around the emitter
    ///
    /// Only fires when no particle is alive; otherwise this is a no-op.
    /// Continuous emission is switched off. Returns the number of particles
    /// spawned.
    pub fn set_explosion(&mut self, splash_amount: usize, radius: f32) -> usize {
        if self.has_particles() {
            log::warn!(
                "Explosion ignored: {} particles still alive",
                self.particles.len()
            );
            return 0;
        }

        if splash_amount == 0 {
            log::warn!("Explosion ignored: splash amount is zero");
            return 0;
        }

        self.set_emitted(false);

        let ring = spawn_ring(
            &self.config,
            &self.template,
            splash_amount,
            radius,
            &mut self.rng,
        );
        self.particles.extend(ring);

        log::debug!(
            "Explosion of {} particles at {:?} (radius {})",
            splash_amount,
            self.config.emitter,
            radius
        );

        splash_amount
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Spawning happens first, so new particles are aged in the frame they
    /// appear.
    pub fn update(&mut self, dt: f32) -> ParticleUpdate {
        if self.config.emitted {
            self.timer.advance(self.config.respawn_rate, dt);
        }

        let spawned = self.timer.drain() as usize;
        self.particles.reserve(spawned);
        for _ in 0..spawned {
            let particle = spawn_particle(&self.config, &self.template, &mut self.rng);
            self.particles.push(particle);
        }

        let frame = FrameParams {
            dt,
            growth: self.config.exponential_growth,
            attenuation: self.config.attenuated.then_some(self.config.lifetime),
        };

        let before = self.particles.len();
        self.particles.retain_mut(|particle| particle.update(&frame));
        let retired = before - self.particles.len();

        log::trace!(
            "Particle update: {} spawned, {} retired, {} active",
            spawned,
            retired,
            self.particles.len()
        );

        ParticleUpdate {
            spawned,
            retired,
            active_particles: self.particles.len(),
        }
    }

    /// Submit every live particle to `target` in spawn order
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        for particle in &self.particles {
            target.draw_sprite(&particle.sprite);
        }
    }

    /// Drop every live particle
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn texture(&self) -> Option<TextureHandle> {
        self.template.texture()
    }

    pub fn color(&self) -> Color {
        self.template.color()
    }

    pub fn particle_size(&self) -> Vec2 {
        self.config.particle_size
    }

    pub fn emitter(&self) -> Vec2 {
        self.config.emitter
    }

    pub fn direction(&self) -> Angle {
        self.config.direction
    }

    pub fn dispersion(&self) -> Angle {
        self.config.dispersion
    }

    pub fn velocity(&self) -> f32 {
        self.config.velocity
    }

    pub fn respawn_rate(&self) -> f32 {
        self.config.respawn_rate
    }

    pub fn respawn_area(&self) -> Vec2 {
        self.config.respawn_area
    }

    pub fn lifetime(&self) -> f32 {
        self.config.lifetime
    }

    pub fn exponential_growth(&self) -> Vec2 {
        self.config.exponential_growth
    }

    pub fn is_emitted(&self) -> bool {
        self.config.emitted
    }

    pub fn is_attenuated(&self) -> bool {
        self.config.attenuated
    }

    /// Snapshot of the current emission parameters
    pub fn config(&self) -> EmitterConfig {
        self.config.clone()
    }

    /// Visual template new particles are cloned from
    pub fn template(&self) -> &Sprite {
        &self.template
    }

    /// Spawn credit carried over to the next frame
    pub fn pending_emission(&self) -> f32 {
        self.timer.accumulated()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Whether any particle is alive
    pub fn has_particles(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Live particles in spawn order
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::SpriteBatch;
    use glam::UVec2;

    #[test]
    fn test_defaults() {
        let engine = ParticleEngine::with_seed(0);

        assert_eq!(engine.particle_size(), Vec2::new(32.0, 32.0));
        assert_eq!(engine.emitter(), Vec2::ZERO);
        assert_eq!(engine.exponential_growth(), Vec2::ONE);
        assert_eq!(engine.velocity(), 0.0);
        assert_eq!(engine.respawn_rate(), 0.0);
        assert_eq!(engine.lifetime(), 0.0);
        assert!(!engine.is_emitted());
        assert!(!engine.is_attenuated());
        assert_eq!(engine.color(), Color::WHITE);
        assert!(engine.texture().is_none());
        assert_eq!(engine.template().origin(), Vec2::new(16.0, 16.0));
        assert!(!engine.has_particles());
    }

    #[test]
    fn test_magnitude_setters_fold_negatives() {
        let mut engine = ParticleEngine::with_seed(0);
        engine.set_velocity(-5.0);
        engine.set_respawn_rate(-3.0);
        engine.set_lifetime(-2.0);

        assert_eq!(engine.velocity(), 5.0);
        assert_eq!(engine.respawn_rate(), 3.0);
        assert_eq!(engine.lifetime(), 2.0);
    }

    #[test]
    fn test_texture_sets_native_size() {
        let mut engine = ParticleEngine::with_seed(0);
        engine.set_texture(TextureHandle::new(1, UVec2::new(64, 128)));

        assert_eq!(engine.particle_size(), Vec2::new(64.0, 128.0));
        assert_eq!(engine.template().scale(), Vec2::ONE);
        assert_eq!(engine.template().origin(), Vec2::new(32.0, 64.0));

        engine.set_particle_size(Vec2::new(16.0, 16.0));
        assert_eq!(engine.template().scale(), Vec2::new(0.25, 0.125));
        assert_eq!(engine.template().origin(), Vec2::new(8.0, 8.0));
    }

    #[test]
    fn test_emission_disabled_does_not_accumulate() {
        let mut engine = ParticleEngine::with_seed(0);
        engine.set_respawn_rate(10.0);

        let update = engine.update(1.0);
        assert_eq!(update.spawned, 0);
        assert_eq!(engine.pending_emission(), 0.0);
    }

    #[test]
    fn test_accumulator_survives_toggle() {
        let mut engine = ParticleEngine::with_seed(0);
        engine.set_respawn_rate(1.0);
        engine.set_emitted(true);
        engine.update(0.5);

        engine.set_emitted(false);
        engine.update(10.0);
        assert_eq!(engine.pending_emission(), 0.5);

        engine.set_emitted(true);
        let update = engine.update(0.5);
        assert_eq!(update.spawned, 1);
    }

    #[test]
    fn test_explosion_disables_emission() {
        let mut engine = ParticleEngine::with_seed(0);
        engine.set_emitted(true);

        assert_eq!(engine.set_explosion(8, 5.0), 8);
        assert!(!engine.is_emitted());
        assert_eq!(engine.particle_count(), 8);
    }

    #[test]
    fn test_explosion_zero_amount_is_noop() {
        let mut engine = ParticleEngine::with_seed(0);
        engine.set_emitted(true);

        assert_eq!(engine.set_explosion(0, 5.0), 0);
        assert!(engine.is_emitted());
        assert!(!engine.has_particles());
    }

    #[test]
    fn test_draw_submits_live_particles() {
        let mut engine = ParticleEngine::with_seed(0);
        engine.set_explosion(6, 1.0);

        let mut batch = SpriteBatch::new();
        engine.draw(&mut batch);
        assert_eq!(batch.len(), 6);

        engine.clear();
        batch.clear();
        engine.draw(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_apply_config_normalizes() {
        let mut engine = ParticleEngine::with_seed(0);
        let config = EmitterConfig {
            velocity: -40.0,
            respawn_rate: -4.0,
            lifetime: -3.0,
            emitted: true,
            color: Color::rgb(1, 2, 3),
            ..EmitterConfig::default()
        };
        engine.apply_config(&config);

        let applied = engine.config();
        assert_eq!(applied.velocity, 40.0);
        assert_eq!(applied.respawn_rate, 4.0);
        assert_eq!(applied.lifetime, 3.0);
        assert!(applied.emitted);
        assert_eq!(applied.color, Color::rgb(1, 2, 3));
    }
}
