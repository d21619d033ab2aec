use super::board::{Board, CENTER, CORNERS, empty_cells};
use super::evaluator::evaluate;
use super::session_rng::SessionRng;
use super::types::{BotLevel, Mark, Outcome};

/// Probability that the Medium tier bothers to block an imminent loss. A
/// deliberate imperfection that separates Medium from Hard.
const MEDIUM_BLOCK_PROBABILITY: f64 = 0.7;

const BOT_MARK: Mark = Mark::O;

/// Picks the cell the bot plays next. The bot always plays `Mark::O`.
///
/// Returns `None` only when the board has no empty cell, which is a contract
/// violation by the caller (the session must be checked for game over before
/// asking for a move).
pub fn select_move(board: &Board, level: BotLevel, rng: &mut SessionRng) -> Option<usize> {
    let empty = empty_cells(board);
    if empty.is_empty() {
        return None;
    }

    let index = match level {
        BotLevel::Easy => rng.pick(&empty),
        BotLevel::Medium => medium_move(board, &empty, rng),
        BotLevel::Hard => hard_move(board, &empty, rng),
        BotLevel::Expert => best_minimax_move(board, &empty),
    };

    Some(index)
}

/// Exhaustive minimax without randomness, split out so callers can run it on
/// a blocking thread. Returns `None` on a full board.
pub fn expert_move(board: &Board) -> Option<usize> {
    let empty = empty_cells(board);
    if empty.is_empty() {
        return None;
    }

    Some(best_minimax_move(board, &empty))
}

fn medium_move(board: &Board, empty: &[usize], rng: &mut SessionRng) -> usize {
    if let Some(index) = winning_move(board, BOT_MARK, empty) {
        return index;
    }

    if rng.random_bool(MEDIUM_BLOCK_PROBABILITY)
        && let Some(index) = winning_move(board, BOT_MARK.opponent(), empty)
    {
        return index;
    }

    rng.pick(empty)
}

fn hard_move(board: &Board, empty: &[usize], rng: &mut SessionRng) -> usize {
    if let Some(index) = winning_move(board, BOT_MARK, empty) {
        return index;
    }

    if let Some(index) = winning_move(board, BOT_MARK.opponent(), empty) {
        return index;
    }

    if board[CENTER].is_none() {
        return CENTER;
    }

    let open_corners: Vec<usize> = CORNERS
        .into_iter()
        .filter(|&corner| board[corner].is_none())
        .collect();
    if !open_corners.is_empty() {
        return rng.pick(&open_corners);
    }

    // Center and corners taken, only edge cells left.
    rng.pick(empty)
}

/// Finds a cell that completes a line for `mark`, trying each empty cell on
/// a scratch copy of the board.
fn winning_move(board: &Board, mark: Mark, empty: &[usize]) -> Option<usize> {
    for &index in empty {
        let mut scratch = *board;
        scratch[index] = Some(mark);
        if let Outcome::Win(line) = evaluate(&scratch)
            && line.mark == mark
        {
            return Some(index);
        }
    }
    None
}

fn best_minimax_move(board: &Board, empty: &[usize]) -> usize {
    let mut best_index = empty[0];
    let mut best_score = i32::MIN;

    // Ascending index order; a strict improvement keeps the first cell of
    // any tied group, so ties resolve deterministically.
    for &index in empty {
        let mut next = *board;
        next[index] = Some(BOT_MARK);
        let score = minimax(next, 0, false);

        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    best_index
}

/// Scores a position for the bot, `depth` plies after the candidate move.
/// Wins are worth more the sooner they arrive, losses less the later they
/// arrive. The board is taken by value: every branch places its mark on its
/// own copy, so no undo step exists to get wrong.
fn minimax(board: Board, depth: i32, maximizing: bool) -> i32 {
    match evaluate(&board) {
        Outcome::Win(line) => {
            return if line.mark == BOT_MARK {
                10 - depth
            } else {
                depth - 10
            };
        }
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mark = if maximizing {
        BOT_MARK
    } else {
        BOT_MARK.opponent()
    };

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in empty_cells(&board) {
        let mut next = board;
        next[index] = Some(mark);
        let score = minimax(next, depth + 1, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
