use std::fmt;

use super::types::{LineKind, Mark};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Rows top to bottom, then columns left to right, then the two diagonals.
/// Both the evaluator and the move selector rely on this order.
pub const WIN_LINES: [([usize; 3], LineKind); 8] = [
    ([0, 1, 2], LineKind::Row(0)),
    ([3, 4, 5], LineKind::Row(1)),
    ([6, 7, 8], LineKind::Row(2)),
    ([0, 3, 6], LineKind::Column(0)),
    ([1, 4, 7], LineKind::Column(1)),
    ([2, 5, 8], LineKind::Column(2)),
    ([0, 4, 8], LineKind::Diagonal),
    ([2, 4, 6], LineKind::AntiDiagonal),
];

/// Snapshot of the 3x3 grid, cells indexed 0..9 in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Returns a copy with `mark` at `index`. Indices past the board are
    /// ignored and the copy is returned unchanged.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = mark;
        }
        next
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let rendered: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| match mark {
                    Mark::Empty => format!(" {} ", row * BOARD_SIZE + col + 1),
                    _ => format!(" {} ", mark.symbol()),
                })
                .collect();
            writeln!(f, "{}", rendered.join("|"))?;
        }
        Ok(())
    }
}
