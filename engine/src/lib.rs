pub mod config;
pub mod game;
pub mod logger;

pub use config::EngineConfig;
pub use game::{
    Board, BotLevel, GameController, GameMode, GameSession, GameSnapshot, GameStats, Mark, Outcome,
    SessionRng, WinningLine, evaluate, expert_move, select_move,
};
