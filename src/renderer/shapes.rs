//! Shape generation for the chase actors
//!
//! Each builder returns filled paths in surface coordinates (y down), ready
//! for any `Surface` backend to replay.

use glam::Vec2;
use std::f32::consts::PI;

use crate::sim::{Color, Ghost, Pacman, PowerCube};

/// Pupil color
pub const PUPIL_COLOR: Color = Color::BLUE;

/// Scallops along the bottom of a ghost
const GHOST_WAVES: u32 = 3;

/// One path segment, mirroring the 2D canvas path API
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Clockwise arc (angles in radians, y down)
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
    },
    QuadTo {
        ctrl: Vec2,
        to: Vec2,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
    },
    Rect {
        min: Vec2,
        size: Vec2,
    },
    Close,
}

/// A filled path
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub fill: Color,
    pub path: Vec<PathOp>,
}

impl Shape {
    pub fn new(fill: Color, path: Vec<PathOp>) -> Self {
        Self { fill, path }
    }
}

/// The power cube: a square centered on its position
pub fn power_cube(cube: &PowerCube) -> Shape {
    let half = cube.size / 2.0;
    Shape::new(
        Color::ORANGE,
        vec![PathOp::Rect {
            min: cube.pos - Vec2::splat(half),
            size: Vec2::splat(cube.size),
        }],
    )
}

/// Pac-Man: a circular sector whose gap follows the mouth phase
pub fn pacman(pacman: &Pacman) -> Shape {
    let center = pacman.pos;
    Shape::new(
        Color::YELLOW,
        vec![
            PathOp::MoveTo(center),
            PathOp::Arc {
                center,
                radius: pacman.radius,
                start: pacman.mouth * PI,
                end: (2.0 - pacman.mouth) * PI,
            },
            PathOp::LineTo(center),
            PathOp::Close,
        ],
    )
}

/// Ghost body: straight sides, semicircular top, scalloped bottom
pub fn ghost_body(ghost: &Ghost) -> Shape {
    let r = ghost.radius;
    let x = ghost.pos.x;
    let y = ghost.pos.y + ghost.float_offset;

    let body_width = r * 2.0;
    let body_height = r * 2.2;
    let wave_width = body_width / GHOST_WAVES as f32;
    let wave_height = r * 0.35;
    let bottom = y + body_height / 2.0;
    let dome_center = Vec2::new(x, y - body_height / 2.0 + r);

    let mut path = Vec::with_capacity(5 + GHOST_WAVES as usize);
    path.push(PathOp::MoveTo(Vec2::new(x - r, bottom)));
    path.push(PathOp::LineTo(Vec2::new(x - r, dome_center.y)));
    path.push(PathOp::Arc {
        center: dome_center,
        radius: r,
        start: PI,
        end: 0.0,
    });
    path.push(PathOp::LineTo(Vec2::new(x + r, bottom)));

    // Right to left
    for i in (1..=GHOST_WAVES).rev() {
        let wave_x = x - r + wave_width * i as f32;
        let dip = if i % 2 == 0 { wave_height } else { -wave_height };
        path.push(PathOp::QuadTo {
            ctrl: Vec2::new(wave_x - wave_width / 2.0, bottom + dip),
            to: Vec2::new(wave_x - wave_width, bottom),
        });
    }
    path.push(PathOp::Close);

    Shape::new(ghost.color, path)
}

/// Eye sockets and pupils; pupils drift side to side over time
pub fn ghost_eyes(ghost: &Ghost, elapsed_secs: f32) -> [Shape; 4] {
    let r = ghost.radius;
    let y = ghost.pos.y + ghost.float_offset;

    let eye_dx = r * 0.35;
    let eye_y = y - r * 0.15;
    let eye_radii = Vec2::new(r * 0.3, r * 0.4);
    let pupil_radius = r * 0.15;
    let pupil_dx = pupil_offset(ghost.pos.x, r, elapsed_secs);

    let eye = |cx: f32| {
        Shape::new(
            Color::WHITE,
            vec![PathOp::Ellipse {
                center: Vec2::new(cx, eye_y),
                radii: eye_radii,
            }],
        )
    };
    let pupil = |cx: f32| {
        Shape::new(
            PUPIL_COLOR,
            vec![PathOp::Arc {
                center: Vec2::new(cx + pupil_dx, eye_y),
                radius: pupil_radius,
                start: 0.0,
                end: 2.0 * PI,
            }],
        )
    };

    let left = ghost.pos.x - eye_dx;
    let right = ghost.pos.x + eye_dx;
    [eye(left), eye(right), pupil(left), pupil(right)]
}

/// Horizontal pupil shift for a ghost at `x`
#[inline]
pub fn pupil_offset(x: f32, radius: f32, elapsed_secs: f32) -> f32 {
    (elapsed_secs * 0.8 + x * 0.01).sin() * radius * 0.12
}
