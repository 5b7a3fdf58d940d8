//! Scene rendering
//!
//! Painting is a pure function of the scene: every frame clears the surface
//! and repaints cube, ghosts, then Pac-Man so he is drawn over everything.

pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::{PathOp, Shape};

use crate::sim::SceneState;

/// A 2D drawing surface
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self, width: f32, height: f32);
    /// Fill one closed path
    fn fill(&mut self, shape: &Shape);
}

/// Paint one frame of the scene
pub fn paint<S: Surface + ?Sized>(state: &SceneState, elapsed_secs: f32, surface: &mut S) {
    surface.clear(state.width, state.height);

    if !state.cube.consumed {
        surface.fill(&shapes::power_cube(&state.cube));
    }

    for ghost in &state.ghosts {
        surface.fill(&shapes::ghost_body(ghost));
        for part in shapes::ghost_eyes(ghost, elapsed_secs) {
            surface.fill(&part);
        }
    }

    surface.fill(&shapes::pacman(&state.pacman));
}

/// Surface that keeps the shapes of the last frame (headless runs and tests)
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Shapes painted since the last clear
    pub shapes: Vec<Shape>,
    /// Number of clears seen (one per frame)
    pub frames: u64,
    /// Shapes painted over the surface's lifetime
    pub total_shapes: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.shapes.clear();
        self.frames += 1;
    }

    fn fill(&mut self, shape: &Shape) {
        self.shapes.push(shape.clone());
        self.total_shapes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ChaseSettings;
    use crate::sim::{ALERT_COLOR, Color};

    fn scene() -> SceneState {
        SceneState::new(1000.0, 400.0, ChaseSettings::default())
    }

    #[test]
    fn test_paint_order_cube_ghosts_pacman() {
        let state = scene();
        let mut surface = RecordingSurface::new();
        paint(&state, 0.0, &mut surface);

        // cube + 3 * (body + 2 eyes + 2 pupils) + pacman
        assert_eq!(surface.shapes.len(), 1 + 3 * 5 + 1);
        assert_eq!(surface.shapes[0].fill, Color::ORANGE);
        assert_eq!(surface.shapes[1].fill, Color::RED);
        assert_eq!(surface.shapes[6].fill, Color::CYAN);
        assert_eq!(surface.shapes[11].fill, Color::PINK);
        assert_eq!(surface.shapes.last().map(|s| s.fill), Some(Color::YELLOW));
    }

    #[test]
    fn test_consumed_cube_is_not_painted() {
        let mut state = scene();
        state.cube.consumed = true;
        for ghost in &mut state.ghosts {
            ghost.color = ALERT_COLOR;
        }
        state.ghosts.pop();

        let mut surface = RecordingSurface::new();
        paint(&state, 1.5, &mut surface);
        assert_eq!(surface.shapes.len(), 2 * 5 + 1);
        assert_eq!(surface.shapes[0].fill, ALERT_COLOR);
    }

    #[test]
    fn test_each_frame_starts_from_a_clear() {
        let state = scene();
        let mut surface = RecordingSurface::new();
        paint(&state, 0.0, &mut surface);
        paint(&state, 0.016, &mut surface);
        assert_eq!(surface.frames, 2);
        assert_eq!(surface.shapes.len(), 17);
        assert_eq!(surface.total_shapes, 34);
    }

    #[test]
    fn test_only_pupils_move_with_time() {
        let state = scene();
        let mut early = RecordingSurface::new();
        let mut late = RecordingSurface::new();
        paint(&state, 0.0, &mut early);
        paint(&state, 1.0, &mut late);

        // Blinky: body, eyes unchanged; pupils shifted
        assert_eq!(early.shapes[1], late.shapes[1]);
        assert_eq!(early.shapes[2], late.shapes[2]);
        assert_ne!(early.shapes[4], late.shapes[4]);
    }
}
