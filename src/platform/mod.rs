//! Platform abstraction layer
//!
//! Browser and native hosts both drive the scene through an `Animator`:
//! - Time: host timestamps in milliseconds (requestAnimationFrame or a fake clock)
//! - Frame scheduling: the host requests frames while the animator says so
//! - Restart: a one-shot delay armed exactly once per finished scene

pub mod animator;

pub use animator::{Animator, FrameOutcome};
