use crate::debug_log;
use super::board::Board;
use super::types::{Mark, Outcome, Position};
use super::win_detector::evaluate_outcome;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub position: Position,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Position,
    pub score: i32,
    pub nodes_visited: u64,
}

#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_visited: u64,
}

/// Picks the move that maximizes `bot_mark`'s worst-case score.
/// Equal scores keep the first move in row-major order.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<SearchResult> {
    let mut board = *board;
    let mut stats = SearchStats::default();

    let mut best: Option<MoveScore> = None;
    for candidate in score_moves_with_stats(&mut board, bot_mark, &mut stats) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    let best = best?;
    debug_log!(
        "minimax picked {} for {:?} with score {} after {} nodes",
        best.position,
        bot_mark,
        best.score,
        stats.nodes_visited
    );

    Some(SearchResult {
        position: best.position,
        score: best.score,
        nodes_visited: stats.nodes_visited,
    })
}

/// Scores every available move for `bot_mark`, in enumeration order.
pub fn score_moves(board: &Board, bot_mark: Mark) -> Vec<MoveScore> {
    let mut board = *board;
    let mut stats = SearchStats::default();
    score_moves_with_stats(&mut board, bot_mark, &mut stats)
}

fn score_moves_with_stats(
    board: &mut Board,
    bot_mark: Mark,
    stats: &mut SearchStats,
) -> Vec<MoveScore> {
    board
        .available_moves()
        .into_iter()
        .map(|position| {
            board.place(position.row, position.col, bot_mark);
            let score = minimax(board, 0, false, bot_mark, stats);
            board.clear(position.row, position.col);
            MoveScore { position, score }
        })
        .collect()
}

/// Full-depth minimax without pruning. Terminal scores are reduced by the
/// depth so faster wins and slower losses rank higher.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes_visited += 1;

    match evaluate_outcome(board) {
        Outcome::Won(line) if line.mark == bot_mark => return WIN_SCORE - depth,
        Outcome::Won(_) => return LOSS_SCORE - depth,
        Outcome::Draw => return DRAW_SCORE - depth,
        Outcome::InProgress => {}
    }

    let opponent_mark = match bot_mark.opponent() {
        Some(mark) => mark,
        None => panic!("search requires a player mark, got {:?}", bot_mark),
    };
    let mover = if is_maximizing { bot_mark } else { opponent_mark };

    let moves = board.available_moves();
    assert!(
        !moves.is_empty(),
        "board reports in progress but has no available moves"
    );

    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    for Position { row, col } in moves {
        board.place(row, col, mover);
        let score = minimax(board, depth + 1, !is_maximizing, bot_mark, stats);
        board.clear(row, col);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
