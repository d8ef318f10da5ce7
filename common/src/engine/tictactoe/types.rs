use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// The human always plays X and moves first.
pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl LineKind {
    pub fn cells(&self) -> [Position; BOARD_SIZE] {
        match *self {
            LineKind::Row(row) => [
                Position::new(row, 0),
                Position::new(row, 1),
                Position::new(row, 2),
            ],
            LineKind::Column(col) => [
                Position::new(0, col),
                Position::new(1, col),
                Position::new(2, col),
            ],
            LineKind::Diagonal => [
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(2, 2),
            ],
            LineKind::AntiDiagonal => [
                Position::new(2, 0),
                Position::new(1, 1),
                Position::new(0, 2),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub kind: LineKind,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, kind: LineKind) -> Self {
        let cells = kind.cells();
        Self {
            mark,
            kind,
            start: cells[0],
            end: cells[BOARD_SIZE - 1],
        }
    }

    pub fn cells(&self) -> [Position; BOARD_SIZE] {
        self.kind.cells()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells().contains(&position)
    }
}

/// Classification of a board. Always derived from the cells, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(line) => Some(line.mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Won(line) => Some(line),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(line) => write!(f, "{} wins", line.mark.symbol()),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
