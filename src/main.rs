//! Terminal blockfall runner.
//!
//! Crossterm for input, a framebuffer view for output, one engine session
//! driven at a fixed frame rate.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::config::RunConfig;
use blockfall::core::{FrameClock, GameSession};
use blockfall::event_log::{EventLog, SessionEvent};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::store::{BestRecord, FileScoreStore};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, FRAME_MS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width in cells.
    #[arg(long)]
    width: Option<usize>,
    /// Board height in cells.
    #[arg(long)]
    height: Option<usize>,
    /// Do not read or write the best-score record.
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RunConfig::from_env()
        .with_board_size(args.width, args.height)
        .with_save(!args.no_save);
    config.validate()?;

    let mut store = config.score_store();
    let mut save = config.save;
    let mut load_error = None;
    let mut best = if save {
        BestRecord::load(&store).unwrap_or_else(|e| {
            // Never overwrite a record that exists but could not be read.
            save = false;
            load_error = Some(e);
            BestRecord::default()
        })
    } else {
        BestRecord::default()
    };
    let mut log = match &config.event_log {
        Some(path) => EventLog::open(path),
        None => EventLog::disabled(),
    };

    let session = GameSession::new(config.game.clone())
        .context("start game")?
        .with_best_score(best.recorded());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut game = Game {
        session,
        store: &mut store,
        best: &mut best,
        save,
        log: &mut log,
        save_error: None,
    };
    let result = game.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    game.persist_best();
    if let Some(e) = load_error {
        eprintln!("[Store] failed to read best score, saving disabled: {e:#}");
    }
    if let Some(e) = game.save_error.take() {
        eprintln!("[Store] failed to save best score: {e:#}");
    }
    result
}

struct Game<'a> {
    session: GameSession,
    store: &'a mut FileScoreStore,
    best: &'a mut BestRecord,
    save: bool,
    log: &'a mut EventLog,
    save_error: Option<anyhow::Error>,
}

impl Game<'_> {
    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        let mut snap = self.session.snapshot();

        let epoch = Instant::now();
        let now_ms = || epoch.elapsed().as_millis() as u64;
        let mut clock = FrameClock::new();
        clock.rebase(now_ms());

        let frame = Duration::from_millis(FRAME_MS as u64);
        let mut next_frame = Instant::now() + frame;

        self.log.record(&SessionEvent::start(&self.session));

        loop {
            // Render.
            self.session.snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;

            // Input with timeout until the next frame.
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            self.apply(action, &mut clock, now_ms());
                        }
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            // Tick.
            if Instant::now() >= next_frame {
                next_frame = Instant::now() + frame;
                let delta = clock.delta(now_ms());
                self.session.tick(delta);
            }

            self.drain_lock_event();
        }
    }

    fn apply(&mut self, action: GameAction, clock: &mut FrameClock, now_ms: u64) {
        let was_paused = self.session.paused();
        let episode = self.session.episode_id();

        if !self.session.apply_action(action) {
            return;
        }

        self.drain_lock_event();

        let episode_now = self.session.episode_id();
        if episode_now != episode {
            self.log.record(&SessionEvent::Restart {
                episode: episode_now,
            });
            clock.rebase(now_ms);
        } else if was_paused && !self.session.paused() {
            self.log.record(&SessionEvent::Resume { episode });
            clock.rebase(now_ms);
        } else if !was_paused && self.session.paused() {
            self.log.record(&SessionEvent::Pause { episode });
        }
    }

    fn drain_lock_event(&mut self) {
        let Some(event) = self.session.take_last_event() else {
            return;
        };
        self.log.record(&SessionEvent::lock(&self.session, &event));
        if event.game_over {
            self.log.record(&SessionEvent::game_over(&self.session));
            self.persist_best();
        }
    }

    fn persist_best(&mut self) {
        if !self.save {
            return;
        }
        if let Err(e) = self.best.persist(&mut *self.store, self.session.best_score()) {
            self.save_error = Some(e);
        }
    }
}
