use crate::debug_log;
use super::board::{Board, is_in_range};
use super::bot::calculate_minimax_move;
use super::types::{COMPUTER_MARK, HUMAN_MARK, Mark, Outcome, Position};
use super::win_detector::evaluate_outcome;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: HUMAN_MARK,
            last_move: None,
        }
    }

    /// Resumes from an existing grid. X moves first, so equal counts mean X is to move.
    pub fn from_board(board: Board) -> Self {
        let current_mark = if board.count(HUMAN_MARK) > board.count(COMPUTER_MARK) {
            COMPUTER_MARK
        } else {
            HUMAN_MARK
        };

        Self {
            board,
            current_mark,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_mark == COMPUTER_MARK && !self.current_outcome().is_terminal()
    }

    pub fn current_outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<Outcome, String> {
        if self.current_outcome().is_terminal() {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != HUMAN_MARK {
            return Err("Not your turn".to_string());
        }

        if !is_in_range(row, col) {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_empty(row, col) {
            return Err("Cell is already marked".to_string());
        }

        Ok(self.place_and_switch(Position::new(row, col)))
    }

    pub fn compute_and_apply_opponent_move(&mut self) -> Result<(Position, Outcome), String> {
        if self.current_outcome().is_terminal() {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != COMPUTER_MARK {
            return Err("Not the computer's turn".to_string());
        }

        let Some(result) = calculate_minimax_move(&self.board, COMPUTER_MARK) else {
            panic!("game is in progress but the computer has no available moves");
        };

        debug_log!(
            "computer plays {} (score {}, {} nodes)",
            result.position,
            result.score,
            result.nodes_visited
        );

        let outcome = self.place_and_switch(result.position);
        Ok((result.position, outcome))
    }

    fn place_and_switch(&mut self, position: Position) -> Outcome {
        self.board.place(position.row, position.col, self.current_mark);
        self.last_move = Some(position);

        let outcome = self.current_outcome();
        if !outcome.is_terminal() {
            self.switch_turn();
        }
        outcome
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == HUMAN_MARK {
            COMPUTER_MARK
        } else {
            HUMAN_MARK
        };
    }
}
