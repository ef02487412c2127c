// Sprite Particles Constants - SINGLE SOURCE OF TRUTH
//
// This file contains ALL numeric constants used by the particle engine.
//
// CRITICAL: Do NOT define constants anywhere else in the codebase!

/// Emitter defaults applied by `ParticleEngine::new`
pub mod emitter {
    /// Default rendered particle size in scene units (32×32)
    pub const DEFAULT_PARTICLE_SIZE: f32 = 32.0;

    /// Default per-frame growth factor (no growth)
    pub const DEFAULT_GROWTH_FACTOR: f32 = 1.0;
}

/// Spawn scheduling and particle lifetime
pub mod emission {
    /// Accumulated emission credit required for one spawn event
    pub const SPAWN_THRESHOLD: f32 = 1.0;

    /// Lifetime floor added to every sampled lifetime (seconds)
    pub const MIN_PARTICLE_LIFETIME: f32 = 1.0;

    /// Upper bound of the random spawn rotation (degrees)
    pub const FULL_TURN_DEGREES: f32 = 360.0;
}

/// Visual attribute constants
pub mod visual {
    /// Fully opaque alpha channel value
    pub const MAX_ALPHA: f32 = 255.0;
}
