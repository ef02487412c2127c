use glam::Vec2;

use crate::constants::visual::MAX_ALPHA;
use crate::particles::Sprite;

/// Individual particle owned by a `ParticleEngine`
#[derive(Debug, Clone)]
pub struct Particle {
    /// Constant linear velocity
    pub(crate) velocity: Vec2,
    /// Remaining time to live (seconds)
    pub(crate) lifetime: f32,
    /// Visual state handed to the render target
    pub(crate) sprite: Sprite,
}

/// Per-frame parameters shared by every particle
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameParams {
    pub dt: f32,
    pub growth: Vec2,
    /// `Some(lifetime_max)` when alpha fades with remaining lifetime
    pub attenuation: Option<f32>,
}

impl Particle {
    pub fn new(sprite: Sprite, velocity: Vec2, lifetime: f32) -> Self {
        Self {
            velocity,
            lifetime,
            sprite,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Advance one frame and report whether the particle stays alive
    ///
    /// Liveness is judged on the lifetime carried in from the previous
    /// frame; the decrement happens afterwards in both branches, so a
    /// particle reaching exactly zero is still drawn once more.
    pub(crate) fn update(&mut self, frame: &FrameParams) -> bool {
        let keep = self.is_alive();

        if keep {
            self.sprite.move_by(self.velocity * frame.dt);

            if let Some(lifetime_max) = frame.attenuation {
                let alpha = (fade_ratio(self.lifetime, lifetime_max) * MAX_ALPHA) as u8;
                let color = self.sprite.color().with_alpha(alpha);
                self.sprite.set_color(color);
            }

            self.sprite.scale_by(frame.growth);
        }

        self.lifetime -= frame.dt;
        keep
    }
}

/// Remaining-lifetime fraction used for alpha fading, in 0..=1
///
/// A zero maximum lifetime yields 1.0 (fully opaque).
pub fn fade_ratio(lifetime: f32, lifetime_max: f32) -> f32 {
    if lifetime_max <= 0.0 {
        return 1.0;
    }
    (lifetime / lifetime_max).clamp(0.0, 1.0)
}
