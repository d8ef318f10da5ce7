use super::board::Board;
use super::types::{BOARD_SIZE, LineKind, Mark, Outcome, WinningLine};

/// Lines in reporting priority: rows, columns, primary diagonal, anti-diagonal.
const LINES: [LineKind; 8] = [
    LineKind::Row(0),
    LineKind::Row(1),
    LineKind::Row(2),
    LineKind::Column(0),
    LineKind::Column(1),
    LineKind::Column(2),
    LineKind::Diagonal,
    LineKind::AntiDiagonal,
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&kind| {
        let [a, b, c] = kind.cells();
        let mark = board.get(a.row, a.col);
        if mark != Mark::Empty
            && board.get(b.row, b.col) == mark
            && board.get(c.row, c.col) == mark
        {
            Some(WinningLine::new(mark, kind))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Pure query shared by the search and the top-level game state.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(line) = check_win_with_line(board) {
        return Outcome::Won(line);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Every line of the board, for callers that want more than the first match.
pub fn all_winning_lines(board: &Board) -> Vec<WinningLine> {
    LINES
        .iter()
        .filter_map(|&kind| {
            let cells = kind.cells();
            let mark = board.get(cells[0].row, cells[0].col);
            let complete = mark != Mark::Empty
                && cells[1..BOARD_SIZE]
                    .iter()
                    .all(|pos| board.get(pos.row, pos.col) == mark);
            complete.then(|| WinningLine::new(mark, kind))
        })
        .collect()
}
