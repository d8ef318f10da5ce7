//! Tic-tac-toe against a perfect-play opponent.
//!
//! [`engine::tictactoe`] holds the board, outcome detection and the exhaustive
//! minimax search. [`config`] and [`logger`] are shared with the host binary.

pub mod config;
pub mod engine;
pub mod logger;

pub use engine::tictactoe;
