use super::types::{BOARD_SIZE, Mark, Position};

/// The 3x3 grid. Exploration mutates it in place and undoes every probe,
/// so a single owned board is enough for the whole search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        assert_in_range(row, col);
        self.cells[row][col]
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Mark::Empty
    }

    pub fn place(&mut self, row: usize, col: usize, mark: Mark) {
        assert_in_range(row, col);
        debug_assert!(
            self.cells[row][col] == Mark::Empty,
            "cell ({}, {}) is already marked",
            row,
            col
        );
        self.cells[row][col] = mark;
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        assert_in_range(row, col);
        self.cells[row][col] = Mark::Empty;
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}

pub fn is_in_range(row: usize, col: usize) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

fn assert_in_range(row: usize, col: usize) {
    assert!(
        is_in_range(row, col),
        "position ({}, {}) is outside the {}x{} board",
        row,
        col,
        BOARD_SIZE,
        BOARD_SIZE
    );
}
