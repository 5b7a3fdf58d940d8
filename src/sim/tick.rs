//! Per-frame scene stepper
//!
//! Advances the chase by exactly one host frame. The cube phase and the ghost
//! phase never run in the same frame.

use super::collision::{find_eaten, reached_cube};
use super::state::{ALERT_COLOR, SceneState};

/// What the host should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Request another frame
    ContinueNextFrame,
    /// Stop scheduling frames and arm the restart timer
    Finished,
}

/// Advance the scene by one frame
pub fn advance(state: &mut SceneState) -> Continuation {
    animate_idle(state);

    if !state.cube.consumed {
        chase_cube(state);
        return Continuation::ContinueNextFrame;
    }

    chase_ghosts(state);
    eat_ghosts(state);

    if state.all_off_screen() {
        log::debug!("Scene finished ({} ghosts left)", state.ghosts.len());
        return Continuation::Finished;
    }

    Continuation::ContinueNextFrame
}

/// Float bob and mouth animation, independent of the chase
fn animate_idle(state: &mut SceneState) {
    let float_step = state.settings.float_step;
    for ghost in &mut state.ghosts {
        ghost.bob(float_step);
    }
    state.pacman.chomp(state.settings.mouth_step);
}

/// Walk toward the power cube and eat it on arrival
fn chase_cube(state: &mut SceneState) {
    let pacman = &mut state.pacman;
    if pacman.pos.x < state.cube.pos.x {
        pacman.pos.x += pacman.speed;
    }

    if reached_cube(pacman.pos.x, pacman.radius, state.cube.pos.x) {
        state.cube.consumed = true;
        for ghost in &mut state.ghosts {
            ghost.color = ALERT_COLOR;
        }
        log::debug!("Power cube eaten at x={:.1}", pacman.pos.x);
    }
}

/// Trail the lead ghost at a fixed gap while every ghost flees right
fn chase_ghosts(state: &mut SceneState) {
    let pacman = &mut state.pacman;
    // With no ghost to trail, Pac-Man walks off on his own
    let limit = state
        .ghosts
        .first()
        .map(|lead| lead.pos.x - pacman.radius - state.settings.trailing_gap);

    if limit.is_none_or(|limit| pacman.pos.x < limit) {
        pacman.pos.x += pacman.speed;
    }

    for ghost in &mut state.ghosts {
        ghost.pos.x += ghost.speed;
    }
}

/// Remove every ghost Pac-Man overlaps, preserving the order of the rest
fn eat_ghosts(state: &mut SceneState) {
    let result = find_eaten(
        state.pacman.pos,
        state.pacman.radius,
        state.ghosts.iter().map(|g| (g.pos, g.radius)),
    );
    if result.is_empty() {
        return;
    }

    let mut index = 0;
    state.ghosts.retain(|ghost| {
        let keep = !result.eaten.contains(&index);
        if !keep {
            log::debug!("{:?} eaten", ghost.kind);
        }
        index += 1;
        keep
    });
}
