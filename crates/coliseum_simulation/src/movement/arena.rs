//! Arena geometry: horizontal distance and the circular wall.

use bevy::prelude::*;

use crate::config::ArenaConfig;

/// Result of a boundary check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constrained {
    /// Proposed position is inside the walkable circle
    Accepted(Vec3),
    /// Wall contact: current position nudged toward the centre
    Bounced(Vec3),
}

impl Constrained {
    pub fn position(self) -> Vec3 {
        match self {
            Constrained::Accepted(position) | Constrained::Bounced(position) => position,
        }
    }
}

/// Euclidean distance on the ground plane (Y ignored).
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x, a.z).distance(Vec2::new(b.x, b.z))
}

/// Unit vector from `from` toward `to` on the ground plane.
///
/// `None` when both points share the same XZ position.
pub fn horizontal_direction(from: Vec3, to: Vec3) -> Option<Vec3> {
    Vec3::new(to.x - from.x, 0.0, to.z - from.z).try_normalize()
}

/// Keep `proposed` inside the walkable circle.
///
/// A rejected move leaves the fighter at `current`, pulled `bounce_strength`
/// units toward the centre.
pub fn constrain(current: Vec3, proposed: Vec3, arena: &ArenaConfig) -> Constrained {
    let horizontal = Vec2::new(proposed.x, proposed.z);
    if horizontal.length() <= arena.walkable_radius() {
        return Constrained::Accepted(proposed);
    }

    let pull = Vec3::new(-current.x, 0.0, -current.z).normalize_or_zero() * arena.bounce_strength;
    Constrained::Bounced(current + pull)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_move_is_accepted() {
        let arena = ArenaConfig::default();
        let proposed = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(
            constrain(Vec3::ZERO, proposed, &arena),
            Constrained::Accepted(proposed)
        );
    }

    #[test]
    fn test_edge_of_walkable_circle_is_accepted() {
        let arena = ArenaConfig::default();
        let proposed = Vec3::new(19.0, 0.0, 0.0);
        assert_eq!(
            constrain(Vec3::new(18.9, 0.0, 0.0), proposed, &arena),
            Constrained::Accepted(proposed)
        );
    }

    #[test]
    fn test_leaving_arena_pulls_toward_centre() {
        let arena = ArenaConfig::default();
        let current = Vec3::new(18.9, 0.0, 0.0);
        let result = constrain(current, Vec3::new(19.2, 0.0, 0.0), &arena);

        let Constrained::Bounced(position) = result else {
            panic!("expected a bounce, got {:?}", result);
        };
        assert!(position.x < current.x);
        assert!((position.x - 18.6).abs() < 1e-4);
        assert_eq!(position.y, 0.0);
        assert_eq!(result.position(), position);
    }

    #[test]
    fn test_horizontal_distance_ignores_height() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 10.0, 4.0);
        assert_eq!(horizontal_distance(a, b), 5.0);
    }

    #[test]
    fn test_horizontal_direction() {
        let dir = horizontal_direction(Vec3::ZERO, Vec3::new(0.0, 2.0, -4.0));
        assert_eq!(dir, Some(Vec3::NEG_Z));
        assert_eq!(horizontal_direction(Vec3::ONE, Vec3::new(1.0, 5.0, 1.0)), None);
    }
}
