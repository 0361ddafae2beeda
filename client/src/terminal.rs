use common::games::tictactoe::{Difficulty, GameStatus, TicTacToeGameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectDifficulty(Difficulty),
    Start,
    Place(usize),
    Reset,
    Help,
    Quit,
}

/// Cells are typed as 1..=9 and turned into board indices 0..=8.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_ascii_lowercase();

    if let Ok(cell) = input.parse::<usize>() {
        if (1..=9).contains(&cell) {
            return Ok(Command::Place(cell - 1));
        }
        return Err(format!("Cell {} does not exist, pick 1-9", cell));
    }

    match input.as_str() {
        "easy" | "medium" | "hard" => Ok(Command::SelectDifficulty(Difficulty::from_name(&input))),
        "start" | "s" => Ok(Command::Start),
        "reset" | "r" => Ok(Command::Reset),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(format!("Unknown command '{}', type help", line.trim())),
    }
}

pub fn help_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::PreGame => {
            "Type easy, medium or hard to pick the difficulty, start to play, quit to leave."
        }
        GameStatus::InProgress => {
            "Type a cell number 1-9 to place X, reset to start over, quit to leave."
        }
        GameStatus::XWon | GameStatus::OWon | GameStatus::Draw => {
            "Type reset to play again or quit to leave."
        }
    }
}

pub fn render_state(state: &TicTacToeGameState) -> String {
    let mut out = String::new();

    if state.status == GameStatus::PreGame {
        out.push_str(&format!("Difficulty: {}\n", state.difficulty));
        out.push_str(help_text(state.status));
        out.push('\n');
        return out;
    }

    out.push('\n');
    out.push_str(&state.board.to_string());
    out.push('\n');

    if let Some(status) = state.status_line() {
        out.push_str(status);
        out.push('\n');
    }

    if let Some(outcome) = state.outcome_message() {
        out.push_str(outcome);
        out.push('\n');
        if let Some(line) = state.winning_line {
            let cells: Vec<String> = line.cells.iter().map(|i| (i + 1).to_string()).collect();
            out.push_str(&format!("Winning line: {} ({})\n", line.kind, cells.join("-")));
        }
        out.push_str(help_text(state.status));
        out.push('\n');
    }

    out
}
