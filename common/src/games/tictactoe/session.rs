use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;

use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::bot_controller::calculate_move;
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{COMPUTER_MARK, Difficulty, GameStatus, HUMAN_MARK};

/// Drives one human-versus-computer game.
///
/// Human moves are applied immediately. The computer answers on a spawned
/// task after `thinking_delay`; until then further human input is refused.
/// `reset`, `shutdown` and dropping the session all cancel a pending answer.
pub struct TicTacToeSession {
    session_id: String,
    game_state: Arc<Mutex<TicTacToeGameState>>,
    rng: Arc<Mutex<SessionRng>>,
    thinking_delay: Duration,
    epoch: Arc<AtomicU64>,
    pending_move: StdMutex<Option<JoinHandle<()>>>,
    turn_notify: Arc<Notify>,
}

impl TicTacToeSession {
    pub fn create(
        session_id: impl Into<String>,
        settings: &TicTacToeSessionSettings,
        rng: SessionRng,
    ) -> Result<Self, String> {
        settings.validate()?;

        let session_id = session_id.into();
        log!(
            "[session:{}] created (difficulty {}, delay {} ms, seed {})",
            session_id,
            settings.difficulty,
            settings.thinking_delay.as_millis(),
            rng.seed()
        );

        Ok(Self {
            session_id,
            game_state: Arc::new(Mutex::new(TicTacToeGameState::new(settings.difficulty))),
            rng: Arc::new(Mutex::new(rng)),
            thinking_delay: settings.thinking_delay,
            epoch: Arc::new(AtomicU64::new(0)),
            pending_move: StdMutex::new(None),
            turn_notify: Arc::new(Notify::new()),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub async fn snapshot(&self) -> TicTacToeGameState {
        self.game_state.lock().await.clone()
    }

    pub async fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), String> {
        self.game_state.lock().await.set_difficulty(difficulty)
    }

    pub async fn start(&self) -> Result<(), String> {
        let mut game_state = self.game_state.lock().await;
        game_state.start()?;
        log!("[session:{}] game started at {}", self.session_id, game_state.difficulty);
        Ok(())
    }

    pub async fn handle_player_move(&self, index: usize) -> Result<(), String> {
        let mut game_state = self.game_state.lock().await;

        if game_state.is_computer_thinking {
            return Err("Computer is thinking".to_string());
        }

        if let Err(e) = game_state.place_mark(HUMAN_MARK, index) {
            log!("[session:{}] Player failed to place mark at {}: {}", self.session_id, index, e);
            return Err(e);
        }

        if game_state.is_computer_turn() {
            game_state.is_computer_thinking = true;
            let scheduled_epoch = self.epoch.load(Ordering::SeqCst);
            drop(game_state);
            self.schedule_computer_move(scheduled_epoch);
        } else {
            log_game_over(&self.session_id, &game_state);
            drop(game_state);
            self.turn_notify.notify_waiters();
        }

        Ok(())
    }

    /// Waits until no computer move is pending and returns the state then.
    /// Any number of callers may wait at once; all of them are woken.
    pub async fn wait_for_turn(&self) -> TicTacToeGameState {
        loop {
            let notified = self.turn_notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            {
                let game_state = self.game_state.lock().await;
                if !game_state.is_computer_thinking {
                    return game_state.clone();
                }
            }
            notified.await;
        }
    }

    pub async fn reset(&self) {
        let mut game_state = self.game_state.lock().await;
        self.cancel_pending_move();
        game_state.reset();
        drop(game_state);
        log!("[session:{}] reset", self.session_id);
        self.turn_notify.notify_waiters();
    }

    /// Cancels a pending computer move and releases the input gate, so
    /// waiters return and the session is not left thinking forever.
    pub async fn shutdown(&self) {
        let mut game_state = self.game_state.lock().await;
        self.cancel_pending_move();
        game_state.is_computer_thinking = false;
        drop(game_state);
        log!("[session:{}] shut down", self.session_id);
        self.turn_notify.notify_waiters();
    }

    fn cancel_pending_move(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut pending) = self.pending_move.lock() {
            if let Some(handle) = pending.take() {
                if !handle.is_finished() {
                    log!("[session:{}] pending computer move cancelled", self.session_id);
                }
                handle.abort();
            }
        }
    }

    fn schedule_computer_move(&self, scheduled_epoch: u64) {
        let session_id = self.session_id.clone();
        let game_state = Arc::clone(&self.game_state);
        let rng = Arc::clone(&self.rng);
        let epoch = Arc::clone(&self.epoch);
        let turn_notify = Arc::clone(&self.turn_notify);
        let delay = self.thinking_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut game_state = game_state.lock().await;
            if epoch.load(Ordering::SeqCst) != scheduled_epoch {
                log!("[session:{}] discarding stale computer move", session_id);
                return;
            }

            play_computer_turn(&session_id, &mut game_state, &rng).await;
            game_state.is_computer_thinking = false;
            drop(game_state);

            turn_notify.notify_waiters();
        });

        if let Ok(mut pending) = self.pending_move.lock() {
            *pending = Some(handle);
        }
    }
}

impl Drop for TicTacToeSession {
    fn drop(&mut self) {
        self.cancel_pending_move();
    }
}

async fn play_computer_turn(
    session_id: &str,
    game_state: &mut TicTacToeGameState,
    rng: &Mutex<SessionRng>,
) {
    if !game_state.is_computer_turn() {
        return;
    }

    let board = game_state.board;
    let calculated_move = {
        let mut rng = rng.lock().await;
        calculate_move(game_state.difficulty, &board, &mut rng)
    };

    let Some(index) = calculated_move else {
        log!("[session:{}] Computer has no move to make", session_id);
        return;
    };

    match game_state.place_mark(COMPUTER_MARK, index) {
        Ok(()) => {
            log!("[session:{}] Computer placed mark at {}", session_id, index);
            log_game_over(session_id, game_state);
        }
        Err(e) => {
            log!("[session:{}] Computer failed to place mark at {}: {}", session_id, index, e);
        }
    }
}

fn log_game_over(session_id: &str, game_state: &TicTacToeGameState) {
    match game_state.status {
        GameStatus::XWon | GameStatus::OWon => {
            if let Some(line) = game_state.winning_line {
                log!("[session:{}] {:?} wins on {}", session_id, line.mark, line.kind);
            }
        }
        GameStatus::Draw => log!("[session:{}] game drawn", session_id),
        GameStatus::PreGame | GameStatus::InProgress => {}
    }
}
