//! GRIDTAC Core - N×N tic-tac-toe rules engine
//!
//! This crate provides the game logic for GRIDTAC:
//! - Square-grid geometry and players
//! - Incremental board state with O(1) move application and win detection
//! - Greedy single-ply move suggestion with urgent-block scoring
//! - Scripted game records (JSON persistence, replay, random generation)
//!
//! The engine is a plain owned value with no I/O of its own: a caller feeds
//! it moves, inspects the returned [`MoveOutcome`], and decides when the game
//! is over.

pub mod board;
pub mod engine;
pub mod record;
pub mod suggest;

// Re-exports for convenient access
pub use board::{Player, Square};
pub use engine::{EngineError, GameEngine, MoveOutcome};
pub use record::GameRecord;
