//! Scene state and actor types
//!
//! Every geometric field is derived from the drawing-surface size so a resize
//! can recompute the layout without disturbing chase progress.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::base_size;
use crate::consts::*;
use crate::settings::ChaseSettings;

/// An sRGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for canvas fill styles
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Color every ghost turns once the power cube is eaten
pub const ALERT_COLOR: Color = Color::BLUE;

/// The three ghosts, each with a fixed identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostKind {
    Blinky, // Red - middle lane
    Inky,   // Cyan - lower lane
    Pinky,  // Pink - upper lane
}

impl GhostKind {
    pub const ALL: [GhostKind; 3] = [GhostKind::Blinky, GhostKind::Inky, GhostKind::Pinky];

    /// Identity color
    pub fn color(&self) -> Color {
        match self {
            GhostKind::Blinky => Color::RED,
            GhostKind::Inky => Color::CYAN,
            GhostKind::Pinky => Color::PINK,
        }
    }

    fn index(&self) -> usize {
        match self {
            GhostKind::Blinky => 0,
            GhostKind::Inky => 1,
            GhostKind::Pinky => 2,
        }
    }

    /// Start x as a fraction of width
    pub fn start_x(&self) -> f32 {
        GHOST_START_X[self.index()]
    }

    /// Lane y as a fraction of height
    pub fn lane_y(&self) -> f32 {
        match self {
            GhostKind::Blinky => 0.5,
            GhostKind::Inky => 0.5 + GHOST_LANE_OFFSET,
            GhostKind::Pinky => 0.5 - GHOST_LANE_OFFSET,
        }
    }
}

/// The chasing actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pacman {
    pub pos: Vec2,
    pub radius: f32,
    /// Horizontal distance per frame
    pub speed: f32,
    /// Mouth opening in multiples of π, within [0, MOUTH_MAX]
    pub mouth: f32,
    /// +1 opening, -1 closing
    pub mouth_dir: f32,
}

impl Pacman {
    /// Open/close the mouth, reversing at fully shut and fully open
    pub fn chomp(&mut self, step: f32) {
        self.mouth = (self.mouth + step * self.mouth_dir).clamp(0.0, MOUTH_MAX);
        if self.mouth >= MOUTH_MAX {
            self.mouth_dir = -1.0;
        } else if self.mouth <= 0.0 {
            self.mouth_dir = 1.0;
        }
    }
}

/// A fleeing ghost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ghost {
    pub kind: GhostKind,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Vertical bob, within [-FLOAT_LIMIT, FLOAT_LIMIT]
    pub float_offset: f32,
    pub float_dir: f32,
    /// Current fill (identity color, or the alert color after the cube is eaten)
    pub color: Color,
}

impl Ghost {
    /// Advance the float bob, flipping direction at the limit
    pub fn bob(&mut self, step: f32) {
        self.float_offset = (self.float_offset + step * self.float_dir).clamp(-FLOAT_LIMIT, FLOAT_LIMIT);
        if self.float_offset.abs() >= FLOAT_LIMIT {
            self.float_dir = if self.float_offset > 0.0 { -1.0 } else { 1.0 };
        }
    }
}

/// The intermediate target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerCube {
    pub pos: Vec2,
    /// Edge length
    pub size: f32,
    pub consumed: bool,
}

/// Where a scene is in its lifetime (derived, never stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneStage {
    /// Pac-Man heading for the power cube
    ChasingCube,
    /// Cube eaten, ghosts fleeing
    ChasingGhosts,
    /// Everyone left the surface on the right
    Finished,
}

/// Complete scene state, owned by whoever drives the frames
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    /// Drawing-surface size
    pub width: f32,
    pub height: f32,
    pub pacman: Pacman,
    /// Ghosts still on the board, in identity order
    pub ghosts: Vec<Ghost>,
    pub cube: PowerCube,
    pub settings: ChaseSettings,
}

impl SceneState {
    /// Create a fresh scene for a surface of the given size
    pub fn new(width: f32, height: f32, settings: ChaseSettings) -> Self {
        let mut state = Self {
            width,
            height,
            pacman: Pacman {
                pos: Vec2::ZERO,
                radius: 0.0,
                speed: 0.0,
                mouth: 0.0,
                mouth_dir: 1.0,
            },
            ghosts: Vec::with_capacity(GhostKind::ALL.len()),
            cube: PowerCube {
                pos: Vec2::ZERO,
                size: 0.0,
                consumed: false,
            },
            settings,
        };
        state.reset();
        state
    }

    /// Base actor size for the current surface
    pub fn base_size(&self) -> f32 {
        base_size(
            self.width,
            self.height,
            self.settings.base_size_divisor,
            self.settings.base_size_height_fraction,
            self.settings.base_size_cap,
        )
    }

    /// Restore the start-of-scene layout, regardless of what was eaten
    pub fn reset(&mut self) {
        let (w, h) = (self.width, self.height);

        self.pacman.pos = Vec2::new(PACMAN_START_X * w, h / 2.0);
        self.pacman.mouth = 0.0;
        self.pacman.mouth_dir = 1.0;

        self.cube.pos = Vec2::new(POWER_CUBE_X * w, h / 2.0);
        self.cube.consumed = false;

        self.ghosts.clear();
        for kind in GhostKind::ALL {
            self.ghosts.push(Ghost {
                kind,
                pos: Vec2::new(kind.start_x() * w, kind.lane_y() * h),
                radius: 0.0,
                speed: 0.0,
                float_offset: 0.0,
                float_dir: 1.0,
                color: kind.color(),
            });
        }

        self.apply_dimensions();
    }

    /// Rescale to a new surface size without touching chase progress
    ///
    /// Sizes, speeds and lanes are recomputed from the layout constants; x
    /// positions scale with the width so nobody jumps backwards.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            log::warn!("Ignoring resize to {}x{}", width, height);
            return;
        }

        // A zero-width scene has everyone stacked at x = 0 and can't have moved
        if self.width <= 0.0 {
            self.width = width;
            self.height = height;
            self.reset();
            return;
        }

        let sx = width / self.width;
        self.pacman.pos.x *= sx;
        self.cube.pos.x *= sx;
        for ghost in &mut self.ghosts {
            ghost.pos.x *= sx;
        }

        self.width = width;
        self.height = height;
        self.apply_dimensions();
    }

    /// Recompute radius/size/speed/y from the surface size
    fn apply_dimensions(&mut self) {
        let (w, h) = (self.width, self.height);
        let base = self.base_size();

        self.pacman.radius = base;
        self.pacman.speed = self.settings.pacman_speed * w;
        self.pacman.pos.y = h / 2.0;

        self.cube.size = base * POWER_CUBE_SCALE;
        self.cube.pos.y = h / 2.0;

        for ghost in &mut self.ghosts {
            ghost.radius = base * GHOST_RADIUS_SCALE;
            ghost.speed = self.settings.ghost_speeds[ghost.kind.index()] * w;
            ghost.pos.y = ghost.kind.lane_y() * h;
        }
    }

    /// Pac-Man and every remaining ghost are past the right edge
    pub fn all_off_screen(&self) -> bool {
        self.pacman.pos.x - self.pacman.radius > self.width
            && self.ghosts.iter().all(|g| g.pos.x - g.radius > self.width)
    }

    pub fn stage(&self) -> SceneStage {
        if !self.cube.consumed {
            SceneStage::ChasingCube
        } else if self.all_off_screen() {
            SceneStage::Finished
        } else {
            SceneStage::ChasingGhosts
        }
    }
}
