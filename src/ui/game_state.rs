//! Game state management for the Othello GUI
//!
//! Wraps a [`Game`] with the front-end concerns: who is human, the engine's
//! deferred "thinking" turn, and status messages. The engine searches a
//! private copy of the board on a worker thread; while a decision is
//! scheduled or in flight no human input is accepted and no second search
//! is started.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{AppConfig, FirstSide, GameMode};
use crate::{AIEngine, Game, MoveError, MoveResult, Pos, Side, Strategy};

/// Engine turn progress
pub enum AiState {
    Idle,
    /// Waiting out the visual delay before searching
    Scheduled { ready_at: Instant },
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub human_side: Side,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,

    // Engine configuration
    depth: u8,
    strategy: Strategy,
    ai_delay: Duration,
    first_side: FirstSide,
}

impl GameState {
    pub fn new(config: &AppConfig) -> Self {
        let first = config.game.first_side.pick();
        Self {
            game: Game::new(first),
            mode: config.game.mode,
            human_side: config.game.human_side,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            depth: config.search.depth,
            strategy: config.search.strategy,
            ai_delay: Duration::from_millis(config.game.ai_delay_ms),
            first_side: config.game.first_side,
        }
    }

    /// Start over in `mode`, keeping the engine settings
    pub fn new_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.game = Game::new(self.first_side.pick());
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Stop the current game without a result
    pub fn end_game(&mut self) {
        self.ai_state = AiState::Idle;
        self.game.abandon();
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Applies from the next engine decision on
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth.max(1);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match (self.mode, self.game.side_to_move()) {
            (GameMode::Solo, Some(side)) => side == self.human_side,
            (GameMode::TwoPlayer, Some(_)) => true,
            (_, None) => false,
        }
    }

    /// Check if it's the engine's turn
    pub fn is_ai_turn(&self) -> bool {
        match (self.mode, self.game.side_to_move()) {
            (GameMode::Solo, Some(side)) => side != self.human_side,
            _ => false,
        }
    }

    /// Engine decision scheduled or running
    pub fn is_ai_thinking(&self) -> bool {
        !matches!(self.ai_state, AiState::Idle)
    }

    /// Squares the human may click right now
    pub fn clickable_moves(&self) -> Vec<Pos> {
        if self.is_human_turn() && !self.is_ai_thinking() {
            self.game.legal_moves().into_iter().map(|m| m.pos).collect()
        } else {
            Vec::new()
        }
    }

    /// Attempt a human move at the given square
    pub fn try_place_disc(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.game.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(MoveError::SearchInFlight);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        self.game.play(pos.x as i32, pos.y as i32)?;
        self.message = None;
        Ok(())
    }

    /// Advance the turn loop by one frame.
    ///
    /// Collects a finished engine result, passes for a side without moves,
    /// and schedules or launches the engine when it is on turn.
    pub fn tick(&mut self) {
        self.check_ai_result();

        if self.game.is_over() {
            return;
        }

        match self.ai_state {
            AiState::Scheduled { ready_at } if Instant::now() >= ready_at => {
                self.start_ai_thinking();
                return;
            }
            AiState::Idle => {}
            _ => return,
        }

        if self.game.must_pass() {
            if let Some(side) = self.game.side_to_move() {
                self.message = Some(format!("{} has no legal move and passes", side.name()));
            }
            if let Err(err) = self.game.pass() {
                tracing::warn!(%err, "pass rejected");
            }
            return;
        }

        if self.is_ai_turn() {
            self.ai_state = AiState::Scheduled {
                ready_at: Instant::now() + self.ai_delay,
            };
        }
    }

    /// Launch the search on a private board copy
    fn start_ai_thinking(&mut self) {
        let Some(side) = self.game.side_to_move() else {
            self.ai_state = AiState::Idle;
            return;
        };

        let board = *self.game.board();
        let depth = self.depth;
        let strategy = self.strategy;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(depth, strategy);
            let result = engine.get_move_with_stats(&board, side);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the engine has finished thinking
    fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine error".to_string());
                    return;
                }
            },
            _ => return,
        };

        self.ai_state = AiState::Idle;

        match &result.best_move {
            Some(mv) => {
                if let Err(err) = self.game.play(mv.pos.x as i32, mv.pos.y as i32) {
                    tracing::warn!(%err, "engine move rejected");
                    self.message = Some(err.to_string());
                }
            }
            None => {
                if let Err(err) = self.game.pass() {
                    tracing::warn!(%err, "engine pass rejected");
                }
            }
        }

        self.last_ai_result = Some(result);
    }

    /// Elapsed engine search time, if searching
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn config(mode: GameMode, first: FirstSide) -> AppConfig {
        AppConfig {
            game: GameConfig {
                mode,
                first_side: first,
                ai_delay_ms: 0,
                ..GameConfig::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_human_turn_in_solo() {
        let state = GameState::new(&config(GameMode::Solo, FirstSide::White));
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());
        assert_eq!(state.clickable_moves().len(), 4);
    }

    #[test]
    fn test_engine_turn_rejects_input() {
        let mut state = GameState::new(&config(GameMode::Solo, FirstSide::Black));
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_disc(Pos::new(2, 3)), Err(MoveError::NotYourTurn));

        state.tick();
        assert!(state.is_ai_thinking());
        assert_eq!(state.try_place_disc(Pos::new(2, 3)), Err(MoveError::SearchInFlight));
        assert!(state.clickable_moves().is_empty());
    }

    #[test]
    fn test_engine_replies_after_human_move() {
        let mut state = GameState::new(&config(GameMode::Solo, FirstSide::White));
        state.try_place_disc(Pos::new(2, 4)).unwrap();
        assert!(state.is_ai_turn());

        let deadline = Instant::now() + Duration::from_secs(10);
        while state.game.side_to_move() != Some(Side::White) && Instant::now() < deadline {
            state.tick();
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(state.game.moves_played(), 2);
        assert!(state.last_ai_result.is_some());
        assert!(!state.is_ai_thinking());
    }

    #[test]
    fn test_two_player_never_schedules_engine() {
        let mut state = GameState::new(&config(GameMode::TwoPlayer, FirstSide::Black));
        state.tick();
        assert!(!state.is_ai_thinking());
        state.try_place_disc(Pos::new(2, 3)).unwrap();
        assert!(state.is_human_turn());
        state.try_place_disc(Pos::new(2, 2)).unwrap();
        assert_eq!(state.game.moves_played(), 2);
    }

    #[test]
    fn test_end_game_blocks_moves() {
        let mut state = GameState::new(&config(GameMode::TwoPlayer, FirstSide::White));
        state.end_game();
        assert_eq!(state.try_place_disc(Pos::new(2, 4)), Err(MoveError::GameOver));
        assert!(state.game.result().is_none());

        state.new_game(GameMode::Solo);
        assert!(!state.game.is_over());
        assert_eq!(state.mode, GameMode::Solo);
    }
}
