//! 2D sprite particle emitter
//!
//! A `ParticleEngine` spawns, ages, moves and retires sprite particles from
//! configurable emission parameters, either continuously or as one-shot
//! ring bursts. Rendering is left to the host through `RenderTarget`.

pub mod constants;
pub mod particles;

pub use glam::{UVec2, Vec2};
pub use particles::{
    Angle, Color, ConfigError, EmitterConfig, Particle, ParticleEngine, ParticleUpdate,
    RenderTarget, Sprite, SpriteBatch, SpriteInstance, TextureHandle, TextureRect,
};
