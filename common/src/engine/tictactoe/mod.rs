mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, is_in_range};
pub use bot::{
    DRAW_SCORE, LOSS_SCORE, MoveScore, SearchResult, SearchStats, WIN_SCORE,
    calculate_minimax_move, minimax, score_moves,
};
pub use game_state::TicTacToeGameState;
pub use types::{
    BOARD_SIZE, COMPUTER_MARK, HUMAN_MARK, LineKind, Mark, Outcome, Position, WinningLine,
};
pub use win_detector::{all_winning_lines, check_win, check_win_with_line, evaluate_outcome};
