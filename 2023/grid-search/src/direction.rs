use glam::I64Vec2;
use strum::EnumIter;

/// A cell coordinate. `x` is the column and `y` is the row, so rows grow
/// southwards.
pub type Position = I64Vec2;

/// Builds a [`Position`] from row-major coordinates.
#[inline]
pub fn position(row: i64, col: i64) -> Position {
    Position::new(col, row)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    #[inline]
    pub fn offset(self) -> Position {
        match self {
            Direction::North => Position::NEG_Y,
            Direction::East => Position::X,
            Direction::South => Position::Y,
            Direction::West => Position::NEG_X,
        }
    }

    /// The neighbouring position one step in this direction.
    #[inline]
    pub fn step(self, from: Position) -> Position {
        from + self.offset()
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Rotates 90° counter-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Rotates 90° clockwise.
    pub fn turn_right(self) -> Self {
        self.turn_left().opposite()
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}
