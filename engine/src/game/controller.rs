use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::config::EngineConfig;
use crate::log;
use super::board::Board;
use super::bot::{expert_move, select_move};
use super::session::GameSession;
use super::session_rng::SessionRng;
use super::types::{BotLevel, GameMode, GameStats, Mark, Outcome};

/// Read-only view of the session for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: Outcome,
    pub is_over: bool,
}

struct ControllerState {
    session: GameSession,
    mode: GameMode,
    difficulty: BotLevel,
    rng: SessionRng,
    // Bumped on every reset. A scheduled bot move that captured an older
    // generation finds the mismatch and discards itself, so a delayed reply
    // can never land on a board it was not computed for.
    generation: u64,
}

/// Owns the session and serializes every mutation through one mutex. In
/// single-player mode the bot plays O, and its reply is applied after a
/// fixed pacing delay rather than synchronously with the human move.
pub struct GameController {
    state: Arc<Mutex<ControllerState>>,
    bot_delay: Duration,
}

impl GameController {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_rng(config, SessionRng::from_random())
    }

    pub fn with_seed(config: &EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, SessionRng::new(seed))
    }

    fn with_rng(config: &EngineConfig, rng: SessionRng) -> Self {
        Self {
            state: Arc::new(Mutex::new(ControllerState {
                session: GameSession::new(),
                mode: config.mode,
                difficulty: config.difficulty,
                rng,
                generation: 0,
            })),
            bot_delay: Duration::from_millis(config.bot_delay_ms),
        }
    }

    /// Applies a human move. Returns `false` for any illegal move, and for
    /// any move made while the bot's delayed reply is pending (in single
    /// mode the session belongs to O until that reply lands).
    pub async fn apply_move(&self, index: usize) -> bool {
        let mut state = self.state.lock().await;

        if state.mode == GameMode::Single && state.session.current_mark() == Mark::O {
            return false;
        }

        if !state.session.apply_move(index) {
            return false;
        }

        if state.mode == GameMode::Single
            && !state.session.is_over()
            && state.session.current_mark() == Mark::O
        {
            let generation = state.generation;
            drop(state);
            self.schedule_bot_move(generation);
        }

        true
    }

    fn schedule_bot_move(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let delay = self.bot_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            play_bot_move(state, generation).await;
        });
    }

    pub async fn get_state(&self) -> GameSnapshot {
        let state = self.state.lock().await;
        GameSnapshot {
            board: *state.session.board(),
            current_mark: state.session.current_mark(),
            outcome: state.session.outcome(),
            is_over: state.session.is_over(),
        }
    }

    pub async fn get_stats(&self) -> GameStats {
        self.state.lock().await.session.stats()
    }

    /// Starts a fresh game and invalidates any pending bot reply. Stats are
    /// untouched.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.session.reset();
    }

    pub async fn reset_stats(&self) {
        self.state.lock().await.session.reset_stats();
    }

    /// Callers are expected to follow a mode change with `reset()`; the
    /// controller stores the new value either way.
    pub async fn set_mode(&self, mode: GameMode) {
        self.state.lock().await.mode = mode;
    }

    /// Callers are expected to follow a difficulty change with `reset()`.
    pub async fn set_difficulty(&self, difficulty: BotLevel) {
        self.state.lock().await.difficulty = difficulty;
    }
}

async fn play_bot_move(state: Arc<Mutex<ControllerState>>, generation: u64) {
    let mut guard = state.lock().await;

    if guard.generation != generation {
        // The session was reset while this reply was pending.
        return;
    }
    if guard.session.is_over() || guard.session.current_mark() != Mark::O {
        return;
    }

    let board = *guard.session.board();
    let difficulty = guard.difficulty;
    let chosen = match difficulty {
        BotLevel::Expert => {
            // The exhaustive search runs off the lock; the generation is
            // re-checked before the result is applied.
            drop(guard);
            let Ok(chosen) = tokio::task::spawn_blocking(move || expert_move(&board)).await else {
                return;
            };
            guard = state.lock().await;
            if guard.generation != generation {
                return;
            }
            if guard.session.is_over() || guard.session.current_mark() != Mark::O {
                return;
            }
            chosen
        }
        level => select_move(&board, level, &mut guard.rng),
    };

    match chosen {
        Some(index) => {
            if !guard.session.apply_move(index) {
                log!("Bot move to cell {} rejected", index);
            }
        }
        None => {
            log!("Bot asked for a move with no empty cells");
        }
    }
}
