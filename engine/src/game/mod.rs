mod board;
mod bot;
mod controller;
mod evaluator;
mod session;
mod session_rng;
mod types;

pub use board::{Board, CELL_COUNT, CENTER, CORNERS, Cell, empty_board, empty_cells, is_full};
pub use bot::{expert_move, select_move};
pub use controller::{GameController, GameSnapshot};
pub use evaluator::{WINNING_LINES, evaluate};
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use types::{BotLevel, GameMode, GameStats, Mark, Outcome, WinningLine};
