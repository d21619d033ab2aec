use super::board::{Board, is_full};
use super::types::{Outcome, WinningLine};

/// The 8 winning triples in canonical order: rows, columns, diagonals.
/// Evaluation reports the first completed triple in this order, which keeps
/// the reported line deterministic even for snapshots where several lines
/// are complete at once.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> Outcome {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board[a]
            && board[b] == Some(mark)
            && board[c] == Some(mark)
        {
            return Outcome::Win(WinningLine::new(mark, line));
        }
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{Cell, empty_board};
    use crate::game::session_rng::SessionRng;
    use crate::game::types::Mark;

    const X: Cell = Some(Mark::X);
    const O: Cell = Some(Mark::O);
    const E: Cell = None;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&empty_board()), Outcome::InProgress);
    }

    #[test]
    fn test_row_win() {
        let board = [X, X, X, O, O, E, E, E, E];

        assert_eq!(
            evaluate(&board),
            Outcome::Win(WinningLine::new(Mark::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_column_win() {
        let board = [O, X, E, O, X, E, O, E, X];

        assert_eq!(
            evaluate(&board),
            Outcome::Win(WinningLine::new(Mark::O, [0, 3, 6]))
        );
    }

    #[test]
    fn test_diagonal_win() {
        let board = [X, O, O, E, X, E, E, E, X];

        assert_eq!(
            evaluate(&board),
            Outcome::Win(WinningLine::new(Mark::X, [0, 4, 8]))
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = [X, X, O, E, O, E, O, E, E];

        assert_eq!(
            evaluate(&board),
            Outcome::Win(WinningLine::new(Mark::O, [2, 4, 6]))
        );
    }

    #[test]
    fn test_draw_on_full_board() {
        let board = [X, X, O, O, O, X, X, O, X];

        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_multiple_lines_report_first_in_canonical_order() {
        // X completes both row [0,1,2] and column [0,3,6]; the row comes
        // first in the canonical order and must be the one reported.
        let board = [X, X, X, X, O, O, X, O, E];

        assert_eq!(
            evaluate(&board),
            Outcome::Win(WinningLine::new(Mark::X, [0, 1, 2]))
        );
    }

    fn swap_marks(board: &Board) -> Board {
        let mut swapped = *board;
        for cell in swapped.iter_mut() {
            *cell = cell.map(Mark::opponent);
        }
        swapped
    }

    #[test]
    fn test_label_swap_symmetry() {
        let mut rng = SessionRng::new(777);

        for _ in 0..500 {
            let mut board = empty_board();
            for cell in board.iter_mut() {
                *cell = match rng.random_range(0..3) {
                    0 => E,
                    1 => X,
                    _ => O,
                };
            }

            let original = evaluate(&board);
            let swapped = evaluate(&swap_marks(&board));

            match (original, swapped) {
                (Outcome::InProgress, Outcome::InProgress) => {}
                (Outcome::Draw, Outcome::Draw) => {}
                (Outcome::Win(a), Outcome::Win(b)) => {
                    assert_eq!(a.cells, b.cells);
                    assert_eq!(a.mark.opponent(), b.mark);
                }
                (a, b) => panic!("asymmetric outcomes: {:?} vs {:?}", a, b),
            }
        }
    }
}
