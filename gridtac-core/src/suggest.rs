//! Greedy single-ply move suggestion
//!
//! Scores every open square from the suggesting player's perspective: extend
//! your fullest row and column, and take any square on a line the opponent is
//! one mark away from completing.

use crate::board::{Player, Square};
use crate::engine::GameEngine;
use tracing::{instrument, trace};

/// Score `square` as a candidate move for `player`
///
/// The base value is the player's current occupancy on the square's row and
/// column. If the opponent needs exactly one more mark on either of those
/// lines, a whole-board bonus is added so that blocking outranks every
/// extension.
pub fn score(engine: &GameEngine, player: Player, square: Square) -> u64 {
    let n = engine.size() as u32;
    let block_bonus = (engine.size() * engine.size()) as u64;
    let opponent = player.opponent();
    let row = square.row as usize;
    let col = square.col as usize;

    let mut score =
        u64::from(engine.row_tally(player, row)) + u64::from(engine.col_tally(player, col));
    if engine.row_tally(opponent, row) == n - 1 {
        score += block_bonus;
    }
    if engine.col_tally(opponent, col) == n - 1 {
        score += block_bonus;
    }
    score
}

impl GameEngine {
    /// Suggest the next move for `player`
    ///
    /// Scans the empty squares in row-major order and keeps the first square
    /// with the strictly highest [`score`]. Performs no mutation and is safe
    /// to call on a finished board; returns `None` only when no empty square
    /// is left.
    #[instrument(level = "trace", skip(self))]
    pub fn suggest_next_move(&self, player: Player) -> Option<Square> {
        let mut best: Option<(Square, u64)> = None;

        for row in 0..self.size() as i32 {
            for col in 0..self.size() as i32 {
                let square = Square::new(row, col);
                if self.cell(square).is_some() {
                    continue;
                }
                let value = score(self, player, square);
                if best.map_or(true, |(_, top)| value > top) {
                    best = Some((square, value));
                }
            }
        }

        if let Some((square, value)) = best {
            trace!(?square, value, "suggestion");
        }
        best.map(|(square, _)| square)
    }
}
