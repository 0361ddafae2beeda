use super::board::{Board, WIN_LINES};
use super::types::{Mark, WinningLine};

/// Verdict for one board snapshot.
///
/// `is_full` is only reported when nobody has won, so a full board with a
/// completed line counts as a win, never as a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub winner: Option<Mark>,
    pub win_line: Option<WinningLine>,
    pub is_full: bool,
}

impl Evaluation {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.is_full
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_full
    }
}

/// Scans the lines in their fixed order and reports the first completed one.
///
/// Boards with two different completed lines cannot arise from alternating
/// play; for such inputs the first line in order wins.
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some(line) = check_win_with_line(board) {
        return Evaluation {
            winner: Some(line.mark),
            win_line: Some(line),
            is_full: false,
        };
    }

    Evaluation {
        winner: None,
        win_line: None,
        is_full: board.is_full(),
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for (line, kind) in WIN_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, line, kind));
        }
    }
    None
}
