use tictactoe_core::tictactoe::{
    Board, COMPUTER_MARK, HUMAN_MARK, Mark, MoveScore, Outcome, Position, WinningLine,
};

const SEPARATOR: &str = "  ---+---+---";

/// Draws the grid with 1-based labels. Cells on the winning line are bracketed.
pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let mut lines = vec!["   1   2   3".to_string()];

    for (row, cells) in board.rows().iter().enumerate() {
        if row > 0 {
            lines.push(SEPARATOR.to_string());
        }
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &mark)| {
                let on_line =
                    winning_line.is_some_and(|line| line.contains(Position::new(row, col)));
                render_cell(mark, on_line)
            })
            .collect();
        lines.push(format!("{} {}", row + 1, rendered.join("|")));
    }

    lines.join("\n")
}

fn render_cell(mark: Mark, highlighted: bool) -> String {
    if highlighted {
        format!("[{}]", mark.symbol())
    } else {
        format!(" {} ", mark.symbol())
    }
}

pub fn end_message(outcome: &Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Won(line) if line.mark == HUMAN_MARK => Some("Human wins!"),
        Outcome::Won(line) if line.mark == COMPUTER_MARK => Some("Computer wins!"),
        Outcome::Won(_) | Outcome::InProgress => None,
        Outcome::Draw => Some("It's a tie!"),
    }
}

pub fn describe_position(position: Position) -> String {
    format!("row {}, column {}", position.row + 1, position.col + 1)
}

pub fn format_move_scores(scores: &[MoveScore]) -> String {
    let entries: Vec<String> = scores
        .iter()
        .map(|s| format!("{},{}={}", s.position.row + 1, s.position.col + 1, s.score))
        .collect();
    format!("Move scores: {}", entries.join("  "))
}
