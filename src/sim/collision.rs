//! Collision checks between Pac-Man and the other actors
//!
//! Both tests are strict: touching is not eating.

use glam::Vec2;

/// Result of checking Pac-Man against the ghost set
#[derive(Debug, Clone, Default)]
pub struct CollisionResult {
    /// Indices into the ghost list, ascending
    pub eaten: Vec<usize>,
}

impl CollisionResult {
    pub fn is_empty(&self) -> bool {
        self.eaten.is_empty()
    }
}

/// Two circles overlap when their centers are closer than the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Pac-Man has reached the power cube (horizontal distance only)
#[inline]
pub fn reached_cube(pacman_x: f32, pacman_radius: f32, cube_x: f32) -> bool {
    (pacman_x - cube_x).abs() < pacman_radius
}

/// Find every ghost overlapping Pac-Man
///
/// Only reads positions; removal happens in a second pass so the scan never
/// sees a list that shifts under it.
pub fn find_eaten<I>(pacman_pos: Vec2, pacman_radius: f32, ghosts: I) -> CollisionResult
where
    I: IntoIterator<Item = (Vec2, f32)>,
{
    let eaten = ghosts
        .into_iter()
        .enumerate()
        .filter(|(_, (pos, radius))| circles_overlap(pacman_pos, pacman_radius, *pos, *radius))
        .map(|(i, _)| i)
        .collect();
    CollisionResult { eaten }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_contact_is_not_a_hit() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(40.0, 0.0);
        assert!(!circles_overlap(a, 20.0, b, 20.0));
        assert!(circles_overlap(a, 20.0, Vec2::new(39.0, 0.0), 20.0));
    }

    #[test]
    fn test_diagonal_distance() {
        // 3-4-5 triangle scaled by 10
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(30.0, 40.0);
        assert!(!circles_overlap(a, 25.0, b, 25.0));
        assert!(circles_overlap(a, 25.0, b, 25.5));
    }

    #[test]
    fn test_reached_cube_is_symmetric_and_strict() {
        assert!(reached_cube(1.0, 20.0, 20.0));
        assert!(!reached_cube(0.0, 20.0, 20.0));
        assert!(reached_cube(39.0, 20.0, 20.0));
        assert!(!reached_cube(40.0, 20.0, 20.0));
    }

    #[test]
    fn test_find_eaten_reports_all_overlaps_in_order() {
        let ghosts = [
            (Vec2::new(10.0, 0.0), 5.0),
            (Vec2::new(500.0, 0.0), 5.0),
            (Vec2::new(-10.0, 0.0), 5.0),
        ];
        let result = find_eaten(Vec2::ZERO, 20.0, ghosts);
        assert_eq!(result.eaten, vec![0, 2]);
        assert!(!result.is_empty());
    }
}
