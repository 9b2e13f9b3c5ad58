//! The four cardinal grid directions.

/// A cardinal direction on the grid.
///
/// Indices follow the convention used throughout the simulation:
/// 0 = right, 1 = down, 2 = left, 3 = up. Cell rotations use the same
/// encoding, so a mover with rotation 1 faces down.
///
/// # Examples
///
/// ```
/// use grist_core::Direction;
///
/// assert_eq!(Direction::from_index(5), Direction::Down);
/// assert_eq!(Direction::from_index(-1), Direction::Up);
/// assert_eq!(Direction::Right.opposite(), Direction::Left);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards positive x (index 0).
    Right,
    /// Towards positive y (index 1).
    Down,
    /// Towards negative x (index 2).
    Left,
    /// Towards negative y (index 3).
    Up,
}

impl Direction {
    /// Index in the 0–3 encoding.
    pub fn index(self) -> u8 {
        match self {
            Self::Right => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Up => 3,
        }
    }

    /// The direction for an index, wrapping modulo 4 in both directions.
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Self::Right,
            1 => Self::Down,
            2 => Self::Left,
            _ => Self::Up,
        }
    }

    /// The direction directly opposite this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
        }
    }

    /// Whether this direction runs along the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }
}
