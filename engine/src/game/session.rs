use super::board::{Board, CELL_COUNT, empty_board};
use super::evaluator::evaluate;
use super::types::{GameStats, Mark, Outcome};

/// One game of tic-tac-toe plus the aggregate stats that survive resets.
/// X always moves first. Exactly one cell is written per accepted move and
/// the stats counters advance exactly once per finished game.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    current_mark: Mark,
    outcome: Outcome,
    stats: GameStats,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            outcome: Outcome::InProgress,
            stats: GameStats::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Applies the current mark to `index`. Returns `false` without touching
    /// anything when the index is out of range, the cell is occupied, or the
    /// game is already over.
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.is_over() || index >= CELL_COUNT || self.board[index].is_some() {
            return false;
        }

        self.board[index] = Some(self.current_mark);
        self.outcome = evaluate(&self.board);

        match self.outcome {
            Outcome::InProgress => self.current_mark = self.current_mark.opponent(),
            Outcome::Win(line) => self.stats.record_win(line.mark),
            Outcome::Draw => self.stats.record_draw(),
        }

        true
    }

    /// Back to an empty board with X to move. Stats are untouched.
    pub fn reset(&mut self) {
        self.board = empty_board();
        self.current_mark = Mark::X;
        self.outcome = Outcome::InProgress;
    }

    pub fn reset_stats(&mut self) {
        self.stats = GameStats::default();
    }
}
