//! Game logic and shared infrastructure for tic-tac-toe against the computer.
//!
//! The decision engine is two pure functions over a [`Board`] snapshot:
//! [`evaluate`] reports a winner or a full board, [`calculate_move`] picks the
//! computer's cell for a [`Difficulty`]. [`TicTacToeSession`] owns the mutable
//! game and paces the computer's replies.
//!
//! [`Board`]: games::tictactoe::Board
//! [`evaluate`]: games::tictactoe::evaluate
//! [`calculate_move`]: games::tictactoe::calculate_move
//! [`Difficulty`]: games::tictactoe::Difficulty
//! [`TicTacToeSession`]: games::tictactoe::TicTacToeSession

pub mod config;
pub mod games;
pub mod logger;
