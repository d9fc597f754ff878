//! Square-grid geometry and players

use serde::{Deserialize, Serialize};

/// A board location (row, column)
///
/// Coordinates are signed; the engine rejects out-of-range squares at move
/// time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this square is on a board of the given size
    pub fn is_within(&self, size: usize) -> bool {
        let n = size as i32;
        self.row >= 0 && self.row < n && self.col >= 0 && self.col < n
    }

    /// On the main diagonal (top-left to bottom-right)
    pub fn on_main_diagonal(&self) -> bool {
        self.row == self.col
    }

    /// On the anti-diagonal (top-right to bottom-left)
    pub fn on_anti_diagonal(&self, size: usize) -> bool {
        self.row + self.col == size as i32 - 1
    }
}

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player tables
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_within(3));
        assert!(Square::new(2, 2).is_within(3));
        assert!(!Square::new(3, 0).is_within(3));
        assert!(!Square::new(0, 3).is_within(3));
        assert!(!Square::new(-1, 1).is_within(3));
        assert!(!Square::new(1, -1).is_within(3));
    }

    #[test]
    fn test_diagonals() {
        assert!(Square::new(0, 0).on_main_diagonal());
        assert!(Square::new(2, 2).on_main_diagonal());
        assert!(!Square::new(0, 2).on_main_diagonal());

        assert!(Square::new(0, 2).on_anti_diagonal(3));
        assert!(Square::new(2, 0).on_anti_diagonal(3));
        assert!(!Square::new(0, 0).on_anti_diagonal(3));

        // Center of an odd board sits on both
        let center = Square::new(1, 1);
        assert!(center.on_main_diagonal());
        assert!(center.on_anti_diagonal(3));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }
}
