pub mod angle;
pub mod color;
pub mod config;
pub mod emission;
pub mod particle;
pub mod particle_system;
pub mod render;
pub mod sprite;

pub use angle::Angle;
pub use color::Color;
pub use config::{ConfigError, ConfigFormat, EmitterConfig};
pub use emission::EmissionTimer;
pub use particle::Particle;
pub use particle_system::{ParticleEngine, ParticleUpdate};
pub use render::{RenderTarget, SpriteBatch, SpriteInstance};
pub use sprite::{Sprite, TextureHandle, TextureRect};
