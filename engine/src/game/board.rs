use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

pub type Cell = Option<Mark>;

/// Row-major 3x3 board, `index = row * 3 + col`. `Copy`, so hypothetical
/// moves are evaluated on value copies and never touch the caller's board.
pub type Board = [Cell; CELL_COUNT];

pub fn empty_board() -> Board {
    [None; CELL_COUNT]
}

pub fn empty_cells(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_full(board: &Board) -> bool {
    board.iter().all(|cell| cell.is_some())
}
