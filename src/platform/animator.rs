//! Frame driver shared by every host
//!
//! Wraps the step-then-paint cycle and the restart bookkeeping so hosts only
//! translate `FrameOutcome` into their own scheduling primitives.

use std::time::Duration;

use crate::renderer::{Surface, paint};
use crate::settings::ChaseSettings;
use crate::sim::{Continuation, SceneState, advance};

/// What the host must schedule after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request the next animation frame
    NextFrame,
    /// Scene done: cancel frame scheduling, call `restart` after the delay
    RestartAfter(Duration),
    /// A restart is pending; nothing was stepped or painted
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    AwaitingRestart,
}

/// Owns one scene and drives it frame by frame
#[derive(Debug)]
pub struct Animator {
    state: SceneState,
    run: RunState,
    /// Timestamp of the first frame (ms); eye tracking runs off this
    start_ms: Option<f64>,
    scenes_finished: u32,
}

impl Animator {
    pub fn new(width: f32, height: f32, settings: ChaseSettings) -> Self {
        Self {
            state: SceneState::new(width, height, settings),
            run: RunState::Running,
            start_ms: None,
            scenes_finished: 0,
        }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SceneState {
        &mut self.state
    }

    /// Scenes completed since creation
    pub fn scenes_finished(&self) -> u32 {
        self.scenes_finished
    }

    pub fn is_awaiting_restart(&self) -> bool {
        self.run == RunState::AwaitingRestart
    }

    /// Step and paint one frame at host time `now_ms`
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> FrameOutcome {
        if self.run == RunState::AwaitingRestart {
            return FrameOutcome::Suspended;
        }

        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed_secs = ((now_ms - start).max(0.0) / 1000.0) as f32;

        let continuation = advance(&mut self.state);
        paint(&self.state, elapsed_secs, surface);

        match continuation {
            Continuation::ContinueNextFrame => FrameOutcome::NextFrame,
            Continuation::Finished => {
                self.run = RunState::AwaitingRestart;
                self.scenes_finished += 1;
                let delay = self.state.settings.restart_delay();
                log::info!(
                    "Chase scene {} finished, restarting in {:.1}s",
                    self.scenes_finished,
                    delay.as_secs_f32()
                );
                FrameOutcome::RestartAfter(delay)
            }
        }
    }

    /// Reset the scene and resume stepping
    pub fn restart(&mut self) {
        self.state.reset();
        self.run = RunState::Running;
        log::info!("Chase scene restarted");
    }

    /// Follow a drawing-surface resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::GhostKind;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn animator() -> Animator {
        Animator::new(1000.0, 400.0, ChaseSettings::default())
    }

    /// Run frames until something other than NextFrame comes back
    fn run_until_outcome(animator: &mut Animator, surface: &mut RecordingSurface, now: &mut f64) -> FrameOutcome {
        for _ in 0..10_000 {
            *now += FRAME_MS;
            let outcome = animator.frame(*now, surface);
            if outcome != FrameOutcome::NextFrame {
                return outcome;
            }
        }
        panic!("scene never finished");
    }

    #[test]
    fn test_lone_pacman_schedules_restart_once() {
        let mut animator = animator();
        let mut surface = RecordingSurface::new();
        {
            let state = animator.state_mut();
            state.cube.consumed = true;
            state.ghosts.clear();
            state.pacman.pos.x = state.width - 50.0;
        }

        let mut now = 0.0;
        let outcome = run_until_outcome(&mut animator, &mut surface, &mut now);
        assert_eq!(outcome, FrameOutcome::RestartAfter(Duration::from_secs(15)));
        assert!(animator.is_awaiting_restart());
        assert_eq!(animator.scenes_finished(), 1);

        // Stray frames while the timer is armed do nothing
        let painted = surface.frames;
        for _ in 0..30 {
            now += FRAME_MS;
            assert_eq!(animator.frame(now, &mut surface), FrameOutcome::Suspended);
        }
        assert_eq!(surface.frames, painted);
        assert_eq!(animator.scenes_finished(), 1);

        animator.restart();
        let fresh = SceneState::new(1000.0, 400.0, ChaseSettings::default());
        let state = animator.state();
        assert_eq!(state.ghosts.len(), 3);
        for (ghost, kind) in state.ghosts.iter().zip(GhostKind::ALL) {
            assert_eq!(ghost.kind, kind);
        }
        for (a, b) in state.ghosts.iter().zip(&fresh.ghosts) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.color, b.color);
            assert_eq!(a.radius, b.radius);
        }
        assert!(!state.cube.consumed);
        assert!(!animator.is_awaiting_restart());
    }

    #[test]
    fn test_full_cycle_restarts_and_runs_again() {
        let mut animator = animator();
        let mut surface = RecordingSurface::new();
        let mut now = 0.0;

        for cycle in 1..=2 {
            let outcome = run_until_outcome(&mut animator, &mut surface, &mut now);
            assert!(matches!(outcome, FrameOutcome::RestartAfter(_)));
            assert_eq!(animator.scenes_finished(), cycle);
            now += 15_000.0;
            animator.restart();
        }
    }

    #[test]
    fn test_custom_restart_delay() {
        let settings = ChaseSettings {
            restart_delay_secs: 2.5,
            ..Default::default()
        };
        let mut animator = Animator::new(600.0, 200.0, settings);
        let mut surface = RecordingSurface::new();
        let mut now = 0.0;
        let outcome = run_until_outcome(&mut animator, &mut surface, &mut now);
        assert_eq!(outcome, FrameOutcome::RestartAfter(Duration::from_millis(2500)));
    }

    #[test]
    fn test_out_of_range_delay_still_restarts() {
        // Bypasses from_json, which would have rejected it
        let settings = ChaseSettings {
            restart_delay_secs: 1e20,
            ..Default::default()
        };
        let mut animator = Animator::new(600.0, 200.0, settings);
        let mut surface = RecordingSurface::new();
        let mut now = 0.0;
        let outcome = run_until_outcome(&mut animator, &mut surface, &mut now);
        assert_eq!(outcome, FrameOutcome::RestartAfter(Duration::from_secs(15)));
    }

    #[test]
    fn test_mounted_at_zero_size_then_resized() {
        let mut animator = Animator::new(0.0, 0.0, ChaseSettings::default());
        let mut surface = RecordingSurface::new();
        animator.resize(1000.0, 400.0);

        assert_eq!(animator.frame(FRAME_MS, &mut surface), FrameOutcome::NextFrame);
        let state = animator.state();
        assert!(!state.cube.consumed);
        assert_eq!(state.ghosts.len(), 3);
        assert!(state.pacman.pos.x < state.cube.pos.x);
    }

    #[test]
    fn test_resize_mid_scene_keeps_scene_running() {
        let mut animator = animator();
        let mut surface = RecordingSurface::new();
        let mut now = 0.0;
        for _ in 0..50 {
            now += FRAME_MS;
            animator.frame(now, &mut surface);
        }
        let consumed = animator.state().cube.consumed;
        let ghosts = animator.state().ghosts.len();

        animator.resize(1600.0, 500.0);
        assert_eq!(animator.state().cube.consumed, consumed);
        assert_eq!(animator.state().ghosts.len(), ghosts);
        assert_eq!(animator.state().width, 1600.0);

        now += FRAME_MS;
        assert_eq!(animator.frame(now, &mut surface), FrameOutcome::NextFrame);
    }
}
