//! Game state tracking and win detection

use crate::board::{Player, Square};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

// ============================================================================
// OUTCOMES AND ERRORS
// ============================================================================

/// Result of applying a single move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move accepted, game continues
    NoWin,
    /// Move accepted and a line is complete
    Win,
    /// Move rejected, state unchanged
    InvalidMove,
    /// Move accepted and the board is full with no line complete
    End,
}

impl MoveOutcome {
    /// Whether this outcome finishes the game
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::Win | MoveOutcome::End)
    }
}

/// Error types for engine construction
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("board size must be at least 1, got {size}")]
    InvalidConfiguration { size: usize },
}

// ============================================================================
// LINE TALLIES
// ============================================================================

/// One player's occupancy counters, one per line
///
/// A counter equals the board size exactly when the player owns every square
/// of that line.
#[derive(Clone, Debug)]
struct LineTallies {
    rows: Vec<u32>,
    cols: Vec<u32>,
    main_diag: u32,
    anti_diag: u32,
}

impl LineTallies {
    fn new(size: usize) -> Self {
        Self {
            rows: vec![0; size],
            cols: vec![0; size],
            main_diag: 0,
            anti_diag: 0,
        }
    }

    /// Count a mark at `square` against every line through it
    fn record(&mut self, square: Square, size: usize) {
        self.rows[square.row as usize] += 1;
        self.cols[square.col as usize] += 1;
        if square.on_main_diagonal() {
            self.main_diag += 1;
        }
        if square.on_anti_diagonal(size) {
            self.anti_diag += 1;
        }
    }

    /// Whether the row and column through `square`, or either diagonal, is
    /// fully owned
    fn wins_from(&self, square: Square, size: usize) -> bool {
        let n = size as u32;
        self.rows[square.row as usize] == n
            || self.cols[square.col as usize] == n
            || self.main_diag == n
            || self.anti_diag == n
    }

    fn clear(&mut self) {
        self.rows.fill(0);
        self.cols.fill(0);
        self.main_diag = 0;
        self.anti_diag = 0;
    }
}

// ============================================================================
// GAME ENGINE
// ============================================================================

/// Rules engine for an N×N board
///
/// Owns the board, the remaining-move counter, and per-line occupancy
/// tallies for both players. Applying a move is O(1): win detection reads
/// the counters touched by the move instead of rescanning the board.
///
/// The engine validates squares, not turns. It accepts consecutive moves by
/// the same player and keeps counting after a line is complete; stopping on
/// `Win`/`End` is the caller's job.
#[derive(Clone, Debug)]
pub struct GameEngine {
    size: usize,
    /// Occupied squares only; an absent key is an empty cell
    board: FxHashMap<Square, Player>,
    moves_left: usize,
    tallies: [LineTallies; 2],
}

impl GameEngine {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create an engine with an empty `size` × `size` board
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidConfiguration { size });
        }
        Ok(Self {
            size,
            board: FxHashMap::default(),
            moves_left: size * size,
            tallies: [LineTallies::new(size), LineTallies::new(size)],
        })
    }

    /// The classic 3×3 board
    pub fn standard() -> Self {
        Self::new(3).expect("3 is a valid board size")
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Apply a move for `player` at `square`
    ///
    /// Returns `InvalidMove`, leaving all state untouched, when the square is
    /// off the board or already occupied. Otherwise the square is marked and
    /// the outcome is `Win` the moment a line completes, `End` when the board
    /// fills without one, and `NoWin` in between.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, player: Player, square: Square) -> MoveOutcome {
        if !square.is_within(self.size) {
            warn!(?square, "move off the board");
            return MoveOutcome::InvalidMove;
        }
        if self.board.contains_key(&square) {
            warn!(?square, "square already occupied");
            return MoveOutcome::InvalidMove;
        }

        self.board.insert(square, player);
        self.moves_left -= 1;
        self.tallies[player.index()].record(square, self.size);

        if self.tallies[player.index()].wins_from(square, self.size) {
            debug!(?player, "line complete");
            return MoveOutcome::Win;
        }
        if self.moves_left == 0 {
            debug!("board full, no winner");
            return MoveOutcome::End;
        }
        MoveOutcome::NoWin
    }

    /// Clear the board for a new game, keeping the size
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.moves_left = self.size * self.size;
        for tally in &mut self.tallies {
            tally.clear();
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Board size N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Empty squares remaining
    pub fn moves_left(&self) -> usize {
        self.moves_left
    }

    /// Mark at `square`, if any
    pub fn cell(&self, square: Square) -> Option<Player> {
        self.board.get(&square).copied()
    }

    /// Whether every square is occupied
    pub fn is_full(&self) -> bool {
        self.moves_left == 0
    }

    /// `player`'s marks on row `row`
    pub fn row_tally(&self, player: Player, row: usize) -> u32 {
        self.tallies[player.index()].rows[row]
    }

    /// `player`'s marks on column `col`
    pub fn col_tally(&self, player: Player, col: usize) -> u32 {
        self.tallies[player.index()].cols[col]
    }

    /// `player`'s marks on the main diagonal
    pub fn main_diagonal_tally(&self, player: Player) -> u32 {
        self.tallies[player.index()].main_diag
    }

    /// `player`'s marks on the anti-diagonal
    pub fn anti_diagonal_tally(&self, player: Player) -> u32 {
        self.tallies[player.index()].anti_diag
    }

    // ========================================================================
    // FRONTIER VIEWS
    // ========================================================================

    /// Rows `player` could still fill (no opposing mark on them)
    pub fn open_rows(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        let opponent = &self.tallies[player.opponent().index()];
        (0..self.size).filter(move |&row| opponent.rows[row] == 0)
    }

    /// Columns `player` could still fill
    pub fn open_cols(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        let opponent = &self.tallies[player.opponent().index()];
        (0..self.size).filter(move |&col| opponent.cols[col] == 0)
    }

    /// Whether any line is still free of opposing marks for `player`
    pub fn can_still_win(&self, player: Player) -> bool {
        let opponent = &self.tallies[player.opponent().index()];
        opponent.main_diag == 0
            || opponent.anti_diag == 0
            || self.open_rows(player).next().is_some()
            || self.open_cols(player).next().is_some()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// TESTS
// ============================================================================
