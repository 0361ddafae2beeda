use super::board::{Board, CELL_COUNT};
use super::types::{COMPUTER_MARK, Difficulty, GameStatus, HUMAN_MARK, Mark, WinningLine};
use super::win_detector::evaluate;

/// Everything the orchestrator knows about one game.
///
/// The lifecycle is `PreGame -> InProgress -> XWon | OWon | Draw`; only
/// `reset` goes back to `PreGame`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub status: GameStatus,
    pub current_mark: Mark,
    pub difficulty: Difficulty,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
    pub is_computer_thinking: bool,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::PreGame,
            current_mark: HUMAN_MARK,
            difficulty,
            last_move: None,
            winning_line: None,
            is_computer_thinking: false,
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), String> {
        if self.status != GameStatus::PreGame {
            return Err("Difficulty can only be changed before the game starts".to_string());
        }
        self.difficulty = difficulty;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), String> {
        if self.status != GameStatus::PreGame {
            return Err("Game has already started".to_string());
        }
        self.status = GameStatus::InProgress;
        Ok(())
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is not in progress".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !self.board.is_valid_move(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.difficulty);
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress
            && self.current_mark == HUMAN_MARK
            && !self.is_computer_thinking
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == COMPUTER_MARK
    }

    pub fn status_line(&self) -> Option<&'static str> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        if self.current_mark == HUMAN_MARK {
            Some("Your turn (X)")
        } else {
            Some("Computer's turn (O)")
        }
    }

    pub fn outcome_message(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::XWon => Some("You Win!"),
            GameStatus::OWon => Some("Computer Wins!"),
            GameStatus::Draw => Some("It's a Draw!"),
            GameStatus::PreGame | GameStatus::InProgress => None,
        }
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        let evaluation = evaluate(&self.board);

        self.status = match evaluation.winner {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ if evaluation.is_full => GameStatus::Draw,
            _ => return,
        };
        self.winning_line = evaluation.win_line;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::LineKind;

    fn started(difficulty: Difficulty) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new(difficulty);
        state.start().unwrap();
        state
    }

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            let mark = state.current_mark;
            state.place_mark(mark, index).unwrap();
        }
    }

    #[test]
    fn test_new_game_waits_in_pre_game() {
        let mut state = TicTacToeGameState::new(Difficulty::Hard);
        assert_eq!(state.status, GameStatus::PreGame);
        assert!(state.place_mark(Mark::X, 0).is_err());
        assert_eq!(state.status_line(), None);
    }

    #[test]
    fn test_difficulty_is_fixed_after_start() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy);
        state.set_difficulty(Difficulty::Hard).unwrap();
        state.start().unwrap();
        assert!(state.set_difficulty(Difficulty::Medium).is_err());
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert!(state.start().is_err());
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = started(Difficulty::Medium);
        assert_eq!(state.status_line(), Some("Your turn (X)"));
        state.place_mark(Mark::X, 4).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert!(state.is_computer_turn());
        assert_eq!(state.status_line(), Some("Computer's turn (O)"));
        assert_eq!(state.place_mark(Mark::X, 0), Err("Not your turn".to_string()));
    }

    #[test]
    fn test_rejects_occupied_and_out_of_bounds() {
        let mut state = started(Difficulty::Medium);
        state.place_mark(Mark::X, 4).unwrap();
        assert!(state.place_mark(Mark::O, 4).is_err());
        assert!(state.place_mark(Mark::O, 9).is_err());
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_human_win_ends_game() {
        let mut state = started(Difficulty::Easy);
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.outcome_message(), Some("You Win!"));
        let line = state.winning_line.unwrap();
        assert_eq!(line.kind, LineKind::Row(0));
        assert_eq!(state.current_mark, Mark::X);
        assert!(state.place_mark(Mark::O, 8).is_err());
    }

    #[test]
    fn test_computer_win_ends_game() {
        let mut state = started(Difficulty::Hard);
        play(&mut state, &[0, 2, 1, 4, 8, 6]);
        assert_eq!(state.status, GameStatus::OWon);
        assert_eq!(state.outcome_message(), Some("Computer Wins!"));
        assert_eq!(state.winning_line.unwrap().kind, LineKind::AntiDiagonal);
    }

    #[test]
    fn test_draw_when_board_fills() {
        let mut state = started(Difficulty::Easy);
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.outcome_message(), Some("It's a Draw!"));
        assert_eq!(state.winning_line, None);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut state = started(Difficulty::Easy);
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 8, 6]);
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winning_line.unwrap().kind, LineKind::Column(0));
        assert!(state.board.is_full());
    }

    #[test]
    fn test_reset_keeps_difficulty() {
        let mut state = started(Difficulty::Hard);
        play(&mut state, &[4, 0]);
        state.reset();
        assert_eq!(state, TicTacToeGameState::new(Difficulty::Hard));
    }
}
