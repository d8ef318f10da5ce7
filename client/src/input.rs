use tictactoe_core::tictactoe::{BOARD_SIZE, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Cell(Position),
    Quit,
}

/// Accepts `q`/`quit`, a cell number `1`-`9` in row-major order,
/// or a 1-based `row col` pair separated by a space or comma.
pub fn parse_player_input(line: &str) -> Result<PlayerInput, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(PlayerInput::Quit);
    }
    parse_cell(trimmed).map(PlayerInput::Cell)
}

pub fn parse_cell(input: &str) -> Result<Position, String> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Err("Enter a cell number 1-9 or a row and column".to_string()),
        [cell] => {
            let cell_count = BOARD_SIZE * BOARD_SIZE;
            let index = parse_one_based(cell, cell_count)?;
            Ok(Position::new(index / BOARD_SIZE, index % BOARD_SIZE))
        }
        [row, col] => Ok(Position::new(
            parse_one_based(row, BOARD_SIZE)?,
            parse_one_based(col, BOARD_SIZE)?,
        )),
        _ => Err(format!("Could not understand '{}'", input)),
    }
}

pub fn is_affirmative(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn parse_one_based(token: &str, max: usize) -> Result<usize, String> {
    let value: usize = token
        .parse()
        .map_err(|_| format!("'{}' is not a number", token))?;
    if value == 0 || value > max {
        return Err(format!("{} is out of range 1-{}", value, max));
    }
    Ok(value - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_are_row_major() {
        assert_eq!(parse_cell("1"), Ok(Position::new(0, 0)));
        assert_eq!(parse_cell("5"), Ok(Position::new(1, 1)));
        assert_eq!(parse_cell("6"), Ok(Position::new(1, 2)));
        assert_eq!(parse_cell("9"), Ok(Position::new(2, 2)));
    }

    #[test]
    fn test_row_and_column_pairs() {
        assert_eq!(parse_cell("1 3"), Ok(Position::new(0, 2)));
        assert_eq!(parse_cell("3,1"), Ok(Position::new(2, 0)));
        assert_eq!(parse_cell(" 2 , 2 "), Ok(Position::new(1, 1)));
    }

    #[test]
    fn test_out_of_range_and_garbage_rejected() {
        assert!(parse_cell("0").is_err());
        assert!(parse_cell("10").is_err());
        assert!(parse_cell("4 1").is_err());
        assert!(parse_cell("a b").is_err());
        assert!(parse_cell("1 2 3").is_err());
        assert!(parse_cell("").is_err());
    }

    #[test]
    fn test_quit_and_affirmative() {
        assert_eq!(parse_player_input("Q\n"), Ok(PlayerInput::Quit));
        assert_eq!(parse_player_input("quit"), Ok(PlayerInput::Quit));
        assert_eq!(
            parse_player_input("7\n"),
            Ok(PlayerInput::Cell(Position::new(2, 0)))
        );
        assert!(is_affirmative(" Yes\n"));
        assert!(is_affirmative("y"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("no"));
    }
}
