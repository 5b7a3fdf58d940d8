//! Chase simulation module
//!
//! All scene logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - One step per host frame, no wall-clock input
//! - Owned state passed explicitly (several scenes can coexist)
//! - Stable ghost order (identity order, removals preserve it)

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, circles_overlap, find_eaten, reached_cube};
pub use state::{
    ALERT_COLOR, Color, Ghost, GhostKind, Pacman, PowerCube, SceneStage, SceneState,
};
pub use tick::{Continuation, advance};
