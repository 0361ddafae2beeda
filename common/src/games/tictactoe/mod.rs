mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, CENTER, CORNERS, WIN_LINES};
pub use bot_controller::{calculate_move, find_completing_move};
pub use game_state::TicTacToeGameState;
pub use session::TicTacToeSession;
pub use settings::{DEFAULT_THINKING_DELAY, MAX_THINKING_DELAY, TicTacToeSessionSettings};
pub use types::{
    COMPUTER_MARK, Difficulty, GameStatus, HUMAN_MARK, LineKind, Mark, WinningLine,
};
pub use win_detector::{Evaluation, check_win, check_win_with_line, evaluate};
