//! Pac-Man Chase - the decorative canvas chase animation of a portfolio page
//!
//! Core modules:
//! - `sim`: Scene state and the per-frame stepper (no rendering or platform dependencies)
//! - `renderer`: Procedural shapes and the drawing-surface abstraction
//! - `platform`: Frame driver and restart scheduling shared by browser/native hosts
//! - `settings`: Data-driven scene tuning
//! - `error`: Host setup and configuration errors

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ChaseError;
pub use platform::{Animator, FrameOutcome};
pub use settings::ChaseSettings;

/// Scene configuration constants
pub mod consts {
    /// Host frame rate the per-frame speeds were tuned for
    pub const TARGET_FPS: f64 = 60.0;

    /// Pac-Man starts just off the left edge (fraction of width)
    pub const PACMAN_START_X: f32 = -0.1;
    /// Pac-Man speed per frame (fraction of width)
    pub const PACMAN_SPEED: f32 = 0.008;

    /// Power cube position (fraction of width)
    pub const POWER_CUBE_X: f32 = 0.2;

    /// Ghost start positions (fraction of width): Blinky, Inky, Pinky
    pub const GHOST_START_X: [f32; 3] = [0.4, 0.45, 0.5];
    /// Vertical lane offset of the outer ghosts (fraction of height)
    pub const GHOST_LANE_OFFSET: f32 = 0.15;
    /// Ghost speeds per frame (fraction of width)
    pub const GHOST_SPEEDS: [f32; 3] = [0.004, 0.0039, 0.0043];

    /// Base size = min(width / divisor, height * fraction), capped
    pub const BASE_SIZE_DIVISOR: f32 = 15.0;
    pub const BASE_SIZE_HEIGHT_FRACTION: f32 = 0.25;
    pub const BASE_SIZE_CAP: f32 = 20.0;
    /// Ghost radius relative to base size
    pub const GHOST_RADIUS_SCALE: f32 = 0.9;
    /// Power cube edge relative to base size
    pub const POWER_CUBE_SCALE: f32 = 0.5;

    /// Gap Pac-Man keeps behind the lead ghost once the cube is eaten
    pub const TRAILING_GAP: f32 = 40.0;

    /// Ghost float bob
    pub const FLOAT_STEP: f32 = 0.5;
    pub const FLOAT_LIMIT: f32 = 8.0;

    /// Pac-Man mouth phase (multiples of π)
    pub const MOUTH_STEP: f32 = 0.007;
    pub const MOUTH_MAX: f32 = 0.3;

    /// Delay before a finished scene restarts
    pub const RESTART_DELAY_SECS: f32 = 15.0;
}

/// Edge length of the actors for a given surface size
#[inline]
pub fn base_size(width: f32, height: f32, divisor: f32, height_fraction: f32, cap: f32) -> f32 {
    (width / divisor).min(height * height_fraction).min(cap)
}
