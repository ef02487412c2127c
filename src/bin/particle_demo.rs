//! Headless particle demo
//!
//! Runs an emitter for a fixed number of frames and logs population
//! statistics. Pass an emitter preset (`.toml` or `.json`) as the first
//! argument, otherwise a built-in fountain is used. Finishes with a burst
//! once the continuous particles have drained.
//!
//! Usage: RUST_LOG=info particle_demo [preset] [frames]

use anyhow::{Context, Result};
use sprite_particles::{
    Angle, EmitterConfig, ParticleEngine, SpriteBatch, TextureHandle, UVec2, Vec2,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 600;
const BURST_SIZE: usize = 24;
const BURST_RADIUS: f32 = 12.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => EmitterConfig::load(&path)
            .with_context(|| format!("Failed to load emitter preset {}", path))?,
        None => default_fountain(),
    };

    let frames = match args.next() {
        Some(value) => value
            .parse::<u32>()
            .with_context(|| format!("Invalid frame count: {}", value))?,
        None => DEFAULT_FRAMES,
    };

    let mut engine = ParticleEngine::with_seed(0x5eed);
    engine.set_texture(TextureHandle::new(0, UVec2::new(64, 64)));
    engine.apply_config(&config);

    let mut batch = SpriteBatch::new();
    let mut total_spawned = 0;
    let mut total_retired = 0;

    for frame in 0..frames {
        // Stop emitting halfway so the population drains
        if frame == frames / 2 {
            engine.set_emitted(false);
            log::info!("Frame {}: emission stopped", frame);
        }

        let update = engine.update(FRAME_DT);
        total_spawned += update.spawned;
        total_retired += update.retired;

        if !engine.is_emitted() && !engine.has_particles() {
            let burst = engine.set_explosion(BURST_SIZE, BURST_RADIUS);
            if burst > 0 {
                log::info!("Frame {}: burst of {} particles", frame, burst);
                total_spawned += burst;
            }
        }

        batch.clear();
        engine.draw(&mut batch);

        if frame % 60 == 0 {
            log::info!(
                "Frame {}: {} active, {} bytes of instance data",
                frame,
                update.active_particles,
                batch.as_bytes().len()
            );
        }
    }

    log::info!(
        "Done: {} spawned, {} retired, {} still alive",
        total_spawned,
        total_retired,
        engine.particle_count()
    );

    Ok(())
}

fn default_fountain() -> EmitterConfig {
    EmitterConfig {
        particle_size: Vec2::splat(16.0),
        emitter: Vec2::new(400.0, 550.0),
        direction: Angle::degrees(-90.0),
        dispersion: Angle::degrees(30.0),
        velocity: 220.0,
        respawn_rate: 60.0,
        respawn_area: Vec2::new(8.0, 0.0),
        lifetime: 2.0,
        exponential_growth: Vec2::splat(1.002),
        emitted: true,
        attenuated: true,
        ..EmitterConfig::default()
    }
}
