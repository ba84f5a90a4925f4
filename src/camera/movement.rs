use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::orientation::Basis;

/// Keyboard-style movement along one of the camera's own axes.
///
/// Abstracts away from window-system key codes; an input layer maps its
/// keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    /// Along `+front`.
    Forward,
    /// Along `-front`.
    Backward,
    /// Along `-right`.
    Left,
    /// Along `+right`.
    Right,
    /// Along `+up`.
    Up,
    /// Along `-up`.
    Down,
}

#[derive(Clone, Copy)]
enum Axis {
    Front,
    Right,
    Up,
}

impl Movement {
    /// Every movement, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    const fn axis_and_sign(self) -> (Axis, f32) {
        match self {
            Self::Forward => (Axis::Front, 1.0),
            Self::Backward => (Axis::Front, -1.0),
            Self::Left => (Axis::Right, -1.0),
            Self::Right => (Axis::Right, 1.0),
            Self::Up => (Axis::Up, 1.0),
            Self::Down => (Axis::Up, -1.0),
        }
    }

    /// Unit world-space direction of this movement for the given basis.
    #[must_use]
    pub fn direction(self, basis: &Basis) -> Vec3 {
        let (axis, sign) = self.axis_and_sign();
        let v = match axis {
            Axis::Front => basis.front,
            Axis::Right => basis.right,
            Axis::Up => basis.up,
        };
        v * sign
    }

    /// The movement pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basis() -> Basis {
        Basis {
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }

    #[test]
    fn directions_follow_basis_signs() {
        let b = basis();
        assert_eq!(Movement::Forward.direction(&b), Vec3::NEG_Z);
        assert_eq!(Movement::Backward.direction(&b), Vec3::Z);
        assert_eq!(Movement::Left.direction(&b), Vec3::NEG_X);
        assert_eq!(Movement::Right.direction(&b), Vec3::X);
        assert_eq!(Movement::Up.direction(&b), Vec3::Y);
        assert_eq!(Movement::Down.direction(&b), Vec3::NEG_Y);
    }

    #[test]
    fn opposites_cancel() {
        let b = basis();
        for m in Movement::ALL {
            assert_eq!(m.opposite().opposite(), m);
            let there_and_back = m.direction(&b) + m.opposite().direction(&b);
            assert_eq!(there_and_back, Vec3::ZERO);
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Movement::Backward).unwrap();
        assert_eq!(json, "\"backward\"");
    }
}
