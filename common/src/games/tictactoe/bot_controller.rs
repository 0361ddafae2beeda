use crate::games::SessionRng;
use super::board::{Board, CENTER, CORNERS, WIN_LINES};
use super::types::{COMPUTER_MARK, Difficulty, HUMAN_MARK, Mark};

/// Picks the cell the computer plays on `board` at the given tier.
///
/// Returns `None` only when the board has no empty cell left.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut SessionRng,
) -> Option<usize> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => calculate_medium_move(board, &available_moves, rng),
        Difficulty::Hard => calculate_hard_move(board, &available_moves, rng),
    }
}

/// First line in board order holding two `mark`s and one empty cell.
///
/// Passing the computer's mark finds a winning move, passing the human's mark
/// finds the cell that blocks them.
pub fn find_completing_move(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();
    for (line, _) in WIN_LINES {
        let mark_count = line.iter().filter(|&&i| cells[i] == mark).count();
        let empty = line.iter().copied().find(|&i| cells[i] == Mark::Empty);
        if mark_count == 2 {
            if let Some(index) = empty {
                return Some(index);
            }
        }
    }
    None
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available_moves).copied()
}

// Blocks but never takes its own win.
fn calculate_medium_move(
    board: &Board,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    if let Some(index) = find_completing_move(board, HUMAN_MARK) {
        return Some(index);
    }

    calculate_random_move(available_moves, rng)
}

fn calculate_hard_move(
    board: &Board,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    if let Some(index) = find_completing_move(board, COMPUTER_MARK) {
        return Some(index);
    }

    if let Some(index) = find_completing_move(board, HUMAN_MARK) {
        return Some(index);
    }

    if board.is_valid_move(CENTER) {
        return Some(CENTER);
    }

    let corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&i| board.is_valid_move(i))
        .collect();
    if !corners.is_empty() {
        return calculate_random_move(&corners, rng);
    }

    calculate_random_move(available_moves, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::evaluate;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn boards_under_test() -> Vec<Board> {
        vec![
            Board::new(),
            Board::from_cells([X, E, E, E, E, E, E, E, E]),
            Board::from_cells([X, X, E, E, O, E, E, E, E]),
            Board::from_cells([O, X, O, X, X, O, E, O, X]),
            Board::from_cells([X, O, X, O, O, X, X, X, E]),
            Board::from_cells([E, X, E, X, O, X, E, X, E]),
        ]
    }

    #[test]
    fn test_full_board_returns_none() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        let mut rng = SessionRng::new(3);
        for difficulty in Difficulty::ALL {
            assert_eq!(calculate_move(difficulty, &board, &mut rng), None);
        }
    }

    #[test]
    fn test_move_is_always_an_empty_cell() {
        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            for board in boards_under_test() {
                for difficulty in Difficulty::ALL {
                    let index = calculate_move(difficulty, &board, &mut rng)
                        .expect("board has empty cells");
                    assert!(board.is_valid_move(index), "{difficulty} picked occupied {index}");
                }
            }
        }
    }

    #[test]
    fn test_find_completing_move_uses_line_order() {
        // X threatens both row 0 (cell 2) and column 0 (cell 6); rows come first.
        let board = Board::from_cells([X, X, E, X, O, E, E, O, E]);
        assert_eq!(find_completing_move(&board, X), Some(2));
        assert_eq!(find_completing_move(&board, O), None);
    }

    #[test]
    fn test_find_completing_move_ignores_blocked_lines() {
        let board = Board::from_cells([X, X, O, E, E, E, E, E, E]);
        assert_eq!(find_completing_move(&board, X), None);
    }

    #[test]
    fn test_hard_blocks_human_threat() {
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
        let mut rng = SessionRng::new(11);
        assert_eq!(calculate_move(Difficulty::Hard, &board, &mut rng), Some(2));
    }

    #[test]
    fn test_hard_prefers_win_over_block() {
        // O completes column 1 at 7 even though X threatens cell 6.
        let board = Board::from_cells([X, O, E, X, O, E, E, E, X]);
        let mut rng = SessionRng::new(5);
        assert_eq!(calculate_move(Difficulty::Hard, &board, &mut rng), Some(7));
    }

    #[test]
    fn test_hard_takes_center_on_empty_board() {
        for seed in 0..10 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(calculate_move(Difficulty::Hard, &Board::new(), &mut rng), Some(CENTER));
        }
    }

    #[test]
    fn test_hard_takes_corner_when_center_is_gone() {
        let board = Board::from_cells([E, E, E, E, X, E, E, E, E]);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let index = calculate_move(Difficulty::Hard, &board, &mut rng).unwrap();
            assert!(CORNERS.contains(&index));
        }
    }

    #[test]
    fn test_hard_falls_back_to_edges() {
        // Centre and corners are taken and no line is one move from done.
        let board = Board::from_cells([X, O, X, E, X, E, O, X, O]);
        assert_eq!(evaluate(&board).winner, None);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let index = calculate_move(Difficulty::Hard, &board, &mut rng).unwrap();
            assert!(index == 3 || index == 5);
        }
    }

    #[test]
    fn test_medium_blocks_human_threat() {
        let board = Board::from_cells([E, E, E, X, X, E, O, E, E]);
        for seed in 0..10 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(calculate_move(Difficulty::Medium, &board, &mut rng), Some(5));
        }
    }

    #[test]
    fn test_medium_does_not_seek_its_own_win() {
        // O could win at 8; X has no threat. Medium plays randomly, so across
        // seeds it must sometimes pick another cell.
        let board = Board::from_cells([O, X, E, E, O, X, E, X, E]);
        let mut picks = Vec::new();
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let index = calculate_move(Difficulty::Medium, &board, &mut rng).unwrap();
            assert!(board.is_valid_move(index));
            picks.push(index);
        }
        assert!(picks.iter().any(|&i| i != 8));
    }

    #[test]
    fn test_easy_ignores_threats() {
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
        let mut picks = Vec::new();
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            picks.push(calculate_move(Difficulty::Easy, &board, &mut rng).unwrap());
        }
        assert!(picks.iter().any(|&i| i != 2));
        assert!(picks.iter().all(|&i| board.is_valid_move(i)));
    }

    #[test]
    fn test_same_seed_same_move() {
        let board = Board::from_cells([X, E, E, E, E, E, E, E, E]);
        for difficulty in Difficulty::ALL {
            let first = calculate_move(difficulty, &board, &mut SessionRng::new(77));
            let second = calculate_move(difficulty, &board, &mut SessionRng::new(77));
            assert_eq!(first, second);
        }
    }
}
