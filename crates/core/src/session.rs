//! Game session - ties the board, the falling piece, and scoring together
//!
//! The host calls [`GameSession::tick`] once per frame with the elapsed time
//! and the command methods once per input. Gravity is the only time-driven
//! transition: when the drop counter exceeds the level's interval the piece
//! steps down one row, locking if it cannot.
//!
//! Lock sequence: merge into the board, clear complete rows, score them,
//! promote the queued piece, and end the game if that piece already collides
//! at its spawn position.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::active::{ActivePiece, DropOutcome};
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::scoring::{calculate_level, calculate_line_score, drop_interval_ms, lines_to_next_level};
use crate::shape::{Position, Shape};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// Emitted each time a piece locks (consumed by observers such as the event log)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub score: u32,
    pub level: u32,
    /// The piece spawned after this lock did not fit
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    rng: StdRng,
    board: Board,
    piece: ActivePiece,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_counter_ms: u32,
    elapsed_ms: u64,
    /// Best score known when the current game started
    best_at_start: u32,
    game_over: bool,
    paused: bool,
    /// Monotonic game counter (increments on restart)
    episode_id: u32,
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Start a game with OS-seeded randomness.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a game with a fixed seed (tests, benchmarks).
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        Ok(Self::assemble(config, board, rng))
    }

    /// Start a game on a pre-filled board of the configured size.
    ///
    /// If the first piece does not fit the game is over immediately and the
    /// board is left exactly as given.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(ConfigError::BoardMismatch {
                width: config.width,
                height: config.height,
                actual_width: board.width(),
                actual_height: board.height(),
            });
        }
        Ok(Self::assemble(config, board, StdRng::seed_from_u64(seed)))
    }

    fn assemble(config: GameConfig, board: Board, mut rng: StdRng) -> Self {
        let first = config.catalog.random_shape(&mut rng);
        let next = config.catalog.random_shape(&mut rng);
        let piece = ActivePiece::spawn(first, next, config.width);

        let mut session = Self {
            config,
            rng,
            board,
            piece,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: drop_interval_ms(1),
            drop_counter_ms: 0,
            elapsed_ms: 0,
            best_at_start: 0,
            game_over: false,
            paused: false,
            episode_id: 0,
            last_event: None,
        };
        session.check_spawn();
        session
    }

    /// Seed the best score the host has on record.
    pub fn with_best_score(mut self, best: u32) -> Self {
        self.best_at_start = best;
        self
    }

    // Queries

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_shape(&self) -> &Shape {
        self.piece.shape()
    }

    pub fn active_position(&self) -> Position {
        self.piece.position()
    }

    pub fn ghost_position(&self) -> Position {
        self.piece.landing_position(&self.board)
    }

    pub fn next_shape(&self) -> &Shape {
        self.piece.next()
    }

    pub fn held_shape(&self) -> Option<&Shape> {
        self.piece.held()
    }

    pub fn hold_used(&self) -> bool {
        self.piece.hold_used()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn lines_to_next_level(&self) -> u32 {
        lines_to_next_level(self.lines)
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Higher of the recorded best and the current score
    pub fn best_score(&self) -> u32 {
        self.best_at_start.max(self.score)
    }

    /// The current game has beaten the best score it started with
    pub fn is_new_best(&self) -> bool {
        self.score > self.best_at_start
    }

    /// Neither paused nor over
    pub fn is_running(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.piece.shape().clone(),
            position: self.piece.position(),
            ghost: self.ghost_position(),
            next: self.piece.next().clone(),
            held: self.piece.held().cloned(),
            hold_available: !self.piece.hold_used(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            lines_to_next_level: self.lines_to_next_level(),
            elapsed_seconds: self.elapsed_seconds(),
            drop_interval_ms: self.drop_interval_ms,
            best_score: self.best_score(),
            new_best: self.is_new_best(),
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    /// Refresh an existing snapshot, reusing its board allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active.clone_from(self.piece.shape());
        out.position = self.piece.position();
        out.ghost = self.ghost_position();
        out.next.clone_from(self.piece.next());
        out.held = self.piece.held().cloned();
        out.hold_available = !self.piece.hold_used();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.lines_to_next_level = self.lines_to_next_level();
        out.elapsed_seconds = self.elapsed_seconds();
        out.drop_interval_ms = self.drop_interval_ms;
        out.best_score = self.best_score();
        out.new_best = self.is_new_best();
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    // Commands

    /// Advance gravity and the play clock by `delta_ms`.
    ///
    /// Returns true if the piece stepped down (or locked) this tick.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.elapsed_ms += u64::from(delta_ms);
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(delta_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.step_down();
            return true;
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.is_running() && self.piece.try_move(&self.board, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.is_running() && self.piece.try_move(&self.board, 1)
    }

    pub fn rotate(&mut self) -> bool {
        self.is_running() && self.piece.try_rotate(&self.board)
    }

    /// Step down one row, locking the piece if it cannot fall.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.step_down();
        true
    }

    /// Fall to the landing row and lock immediately.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.piece.drop_to_floor(&self.board);
        self.lock_piece();
        self.drop_counter_ms = 0;
        true
    }

    /// Stash or swap the active piece, once per spawned piece.
    pub fn hold(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Self {
            piece, config, rng, ..
        } = self;
        piece.hold(config.width, || config.catalog.random_shape(rng))
    }

    pub fn pause(&mut self) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        self.paused = true;
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Start-button semantics: a new game when over, otherwise pause/resume.
    pub fn start_or_toggle(&mut self) -> bool {
        if self.game_over {
            self.restart();
            true
        } else {
            self.toggle_pause()
        }
    }

    /// Reinitialize board, counters, and pieces from scratch.
    pub fn restart(&mut self) {
        self.best_at_start = self.best_score();
        self.board.clear();

        let first = self.draw_shape();
        let next = self.draw_shape();
        self.piece = ActivePiece::spawn(first, next, self.config.width);

        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = drop_interval_ms(1);
        self.drop_counter_ms = 0;
        self.elapsed_ms = 0;
        self.game_over = false;
        self.paused = false;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);

        self.check_spawn();
    }

    /// Dispatch a command from the input layer.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start_or_toggle(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    // Internals

    fn draw_shape(&mut self) -> Shape {
        self.config.catalog.random_shape(&mut self.rng)
    }

    fn step_down(&mut self) {
        if self.piece.step_down(&self.board) == DropOutcome::Landed {
            self.lock_piece();
        }
        self.drop_counter_ms = 0;
    }

    fn lock_piece(&mut self) {
        self.piece.lock_into(&mut self.board);
        let cleared = self.board.clear_completed_lines() as u32;
        let points = self.award_lines(cleared);

        let fresh = self.draw_shape();
        self.piece.advance(fresh, self.config.width);
        self.check_spawn();

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            points,
            score: self.score,
            level: self.level,
            game_over: self.game_over,
        });
    }

    /// Score a clear at the current level, then apply any level-up.
    fn award_lines(&mut self, cleared: u32) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let points = calculate_line_score(cleared as usize, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += cleared;

        let level = calculate_level(self.lines);
        if level > self.level {
            self.level = level;
            self.drop_interval_ms = drop_interval_ms(level);
        }
        points
    }

    fn check_spawn(&mut self) {
        if self.piece.collides(&self.board) {
            self.game_over = true;
        }
    }
}
