use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, Lines};

use tictactoe_core::tictactoe::{COMPUTER_MARK, Outcome, TicTacToeGameState, score_moves};
use tictactoe_core::{debug_log, log};

use crate::config::Config;
use crate::input::{PlayerInput, is_affirmative, parse_player_input};
use crate::ui::{describe_position, end_message, format_move_scores, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub bot_delay: Duration,
    pub show_move_scores: bool,
}

impl From<&Config> for GameSettings {
    fn from(config: &Config) -> Self {
        Self {
            bot_delay: Duration::from_millis(config.bot_delay_ms),
            show_move_scores: config.show_move_scores,
        }
    }
}

enum RoundEnd {
    Finished,
    Quit,
}

/// Plays rounds until the player declines a rematch, quits, or input ends.
pub async fn run_tictactoe_game<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    settings: &GameSettings,
) -> Result<u32, String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = TicTacToeGameState::new();
    let mut rounds = 0;

    loop {
        rounds += 1;
        log!("Starting round {}", rounds);

        if let RoundEnd::Quit = play_round(&mut state, lines, out, settings).await? {
            break;
        }

        emit(out, "Play again? [y/N] ")?;
        match next_line(lines).await? {
            Some(answer) if is_affirmative(&answer) => state.reset(),
            _ => break,
        }
    }

    log!("Session finished after {} round(s)", rounds);
    Ok(rounds)
}

async fn play_round<R, W>(
    state: &mut TicTacToeGameState,
    lines: &mut Lines<R>,
    out: &mut W,
    settings: &GameSettings,
) -> Result<RoundEnd, String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    emit_line(out, &render_board(state.board(), None))?;

    loop {
        let outcome = state.current_outcome();
        if let Some(message) = end_message(&outcome) {
            log!("Round over: {}", outcome);
            emit_line(out, message)?;
            return Ok(RoundEnd::Finished);
        }

        if state.is_computer_turn() {
            let outcome = play_computer_turn(state, out, settings).await?;
            emit_line(out, &render_board(state.board(), outcome.winning_line()))?;
            continue;
        }

        emit(out, "Your move (1-9 or 'row col', q to quit): ")?;
        let Some(line) = next_line(lines).await? else {
            return Ok(RoundEnd::Quit);
        };

        let position = match parse_player_input(&line) {
            Ok(PlayerInput::Quit) => return Ok(RoundEnd::Quit),
            Ok(PlayerInput::Cell(position)) => position,
            Err(e) => {
                emit_line(out, &e)?;
                continue;
            }
        };

        match state.apply_human_move(position.row, position.col) {
            Ok(outcome) => {
                emit_line(out, &render_board(state.board(), outcome.winning_line()))?;
            }
            Err(e) => {
                // Occupied cells and late clicks are ignored.
                debug_log!("Ignored move at {}: {}", position, e);
            }
        }
    }
}

async fn play_computer_turn<W: Write>(
    state: &mut TicTacToeGameState,
    out: &mut W,
    settings: &GameSettings,
) -> Result<Outcome, String> {
    if !settings.bot_delay.is_zero() {
        tokio::time::sleep(settings.bot_delay).await;
    }

    let mut searched = state.clone();
    let show_scores = settings.show_move_scores;
    let (searched, result, scores) = tokio::task::spawn_blocking(move || {
        let scores = show_scores.then(|| score_moves(searched.board(), COMPUTER_MARK));
        let result = searched.compute_and_apply_opponent_move();
        (searched, result, scores)
    })
    .await
    .map_err(|e| format!("Search task failed: {}", e))?;

    let (position, outcome) = result?;
    *state = searched;

    if let Some(scores) = scores {
        emit_line(out, &format_move_scores(&scores))?;
    }
    emit_line(out, &format!("Computer plays {}", describe_position(position)))?;
    Ok(outcome)
}

async fn next_line<R: AsyncBufRead + Unpin>(
    lines: &mut Lines<R>,
) -> Result<Option<String>, String> {
    lines
        .next_line()
        .await
        .map_err(|e| format!("Failed to read input: {}", e))
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<(), String> {
    write!(out, "{}", text)
        .and_then(|_| out.flush())
        .map_err(|e| format!("Failed to write output: {}", e))
}

fn emit_line<W: Write>(out: &mut W, text: &str) -> Result<(), String> {
    emit(out, &format!("{}\n", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, BufReader};

    fn settings() -> GameSettings {
        tictactoe_core::logger::init_logger(None, false);
        GameSettings {
            bot_delay: Duration::ZERO,
            show_move_scores: false,
        }
    }

    async fn run_script(script: &str, settings: &GameSettings) -> (u32, String) {
        let mut lines = BufReader::new(script.as_bytes()).lines();
        let mut out = Vec::new();
        let rounds = run_tictactoe_game(&mut lines, &mut out, settings)
            .await
            .unwrap();
        (rounds, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_computer_punishes_ignored_threat() {
        // X: 1, 2, 9. O answers center, blocks at 3, then wins on the anti-diagonal.
        let (rounds, output) = run_script("1\n2\n9\nn\n", &settings()).await;
        assert_eq!(rounds, 1);
        assert!(output.contains("Computer plays row 2, column 2"));
        assert!(output.contains("Computer plays row 1, column 3"));
        assert!(output.contains("Computer plays row 3, column 1"));
        assert!(output.contains("Computer wins!"));
        assert_eq!(output.matches("[O]").count(), 3);
    }

    #[tokio::test]
    async fn test_bad_input_and_occupied_cells_are_ignored() {
        let (_, output) = run_script("hello\n5\n5\nq\n", &settings()).await;
        assert!(output.contains("'hello' is not a number"));
        // The second 5 hits an occupied cell; only one computer reply happens.
        assert_eq!(output.matches("Computer plays").count(), 1);
        assert!(!output.contains("wins!"));
    }

    #[tokio::test]
    async fn test_end_of_input_stops_session() {
        let (rounds, output) = run_script("", &settings()).await;
        assert_eq!(rounds, 1);
        assert!(output.contains("Your move"));
    }

    #[tokio::test]
    async fn test_rematch_starts_fresh_round() {
        let (rounds, output) = run_script("1\n2\n9\ny\nq\n", &settings()).await;
        assert_eq!(rounds, 2);
        assert_eq!(output.matches("Computer wins!").count(), 1);
    }

    #[tokio::test]
    async fn test_move_scores_are_printed_when_enabled() {
        let settings = GameSettings {
            show_move_scores: true,
            ..settings()
        };
        let (_, output) = run_script("1\nq\n", &settings).await;
        assert!(output.contains("Move scores: 1,2="));
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            bot_delay_ms: 500,
            show_move_scores: true,
        };
        let settings = GameSettings::from(&config);
        assert_eq!(settings.bot_delay, Duration::from_millis(500));
        assert!(settings.show_move_scores);
    }
}
