use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::emission::{FULL_TURN_DEGREES, MIN_PARTICLE_LIFETIME, SPAWN_THRESHOLD};
use crate::particles::{Angle, EmitterConfig, Particle, Sprite};

/// Fixed-threshold accumulator turning elapsed time into spawn events
///
/// Fractional credit is carried between frames so the average spawn
/// frequency matches the rate regardless of how time is sliced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmissionTimer {
    accumulator: f32,
}

impl EmissionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rate * dt` of spawn credit
    pub fn advance(&mut self, rate: f32, dt: f32) {
        self.accumulator += rate * dt;
    }

    /// Consume every whole unit of credit, returning the spawn count
    pub fn drain(&mut self) -> u32 {
        if !self.accumulator.is_finite() {
            log::warn!("Emission accumulator overflowed ({}), resetting", self.accumulator);
            self.accumulator = 0.0;
            return 0;
        }

        if self.accumulator < SPAWN_THRESHOLD {
            return 0;
        }

        let count = self.accumulator.floor();
        self.accumulator -= count;
        count as u32
    }

    /// Credit carried over to the next frame
    pub fn accumulated(&self) -> f32 {
        self.accumulator
    }
}

/// Uniform sample between `lo` and `hi`
///
/// Bounds may be given in either order; equal bounds return `lo`.
pub fn frand(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

/// Initial lifetime: `uniform(0, lifetime_max)` plus the one-second floor
pub fn sample_lifetime(rng: &mut impl Rng, lifetime_max: f32) -> f32 {
    frand(rng, 0.0, lifetime_max) + MIN_PARTICLE_LIFETIME
}

/// Spawn one particle for continuous emission
pub(crate) fn spawn_particle(config: &EmitterConfig, template: &Sprite, rng: &mut impl Rng) -> Particle {
    let half_dispersion = (config.dispersion * 0.5).as_degrees();
    let offset = frand(rng, -half_dispersion, half_dispersion);
    let angle = (config.direction + Angle::degrees(offset)).as_radians();

    let velocity = Vec2::new(angle.cos(), angle.sin()) * config.velocity;
    let lifetime = sample_lifetime(rng, config.lifetime);

    // Jitter is a non-negative offset from the emission point
    let jitter = Vec2::new(
        frand(rng, 0.0, config.respawn_area.x),
        frand(rng, 0.0, config.respawn_area.y),
    );

    let mut sprite = template.clone();
    sprite.set_position(config.emitter + jitter);
    sprite.set_rotation(Angle::degrees(frand(rng, 0.0, FULL_TURN_DEGREES)));

    log::trace!("Spawned particle at {:?} with velocity {:?}", sprite.position(), velocity);

    Particle::new(sprite, velocity, lifetime)
}

/// Spawn a ring of `splash_amount` particles moving radially outward
pub(crate) fn spawn_ring(
    config: &EmitterConfig,
    template: &Sprite,
    splash_amount: usize,
    radius: f32,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    if splash_amount == 0 {
        return Vec::new();
    }

    let offset = TAU / splash_amount as f32;

    (0..splash_amount)
        .map(|i| {
            let dir = i as f32 * offset;
            let (sine, cosine) = dir.sin_cos();
            let unit = Vec2::new(cosine, sine);

            let mut sprite = template.clone();
            sprite.set_position(config.emitter + unit * radius);

            Particle::new(sprite, unit * config.velocity, sample_lifetime(rng, config.lifetime))
        })
        .collect()
}
