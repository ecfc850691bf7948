//! Session event log (JSON lines).
//!
//! When the run configuration names a log file, every session event is appended
//! to it as one JSON object per line. A write failure turns the log off for
//! the rest of the run; gameplay never stops because of it.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::core::{GameSession, LockEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Start {
        episode: u32,
        best_score: u32,
    },
    Lock {
        episode: u32,
        lines_cleared: u32,
        points: u32,
        score: u32,
        level: u32,
    },
    GameOver {
        episode: u32,
        score: u32,
        lines: u32,
        level: u32,
        elapsed_seconds: u64,
        new_best: bool,
    },
    Pause {
        episode: u32,
    },
    Resume {
        episode: u32,
    },
    Restart {
        episode: u32,
    },
}

impl SessionEvent {
    pub fn start(session: &GameSession) -> Self {
        Self::Start {
            episode: session.episode_id(),
            best_score: session.best_score(),
        }
    }

    pub fn lock(session: &GameSession, event: &LockEvent) -> Self {
        Self::Lock {
            episode: session.episode_id(),
            lines_cleared: event.lines_cleared,
            points: event.points,
            score: event.score,
            level: event.level,
        }
    }

    pub fn game_over(session: &GameSession) -> Self {
        Self::GameOver {
            episode: session.episode_id(),
            score: session.score(),
            lines: session.lines(),
            level: session.level(),
            elapsed_seconds: session.elapsed_seconds(),
            new_best: session.is_new_best(),
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    ts_ms: u64,
    #[serde(flatten)]
    event: &'a SessionEvent,
}

pub struct EventLog<W: Write = BufWriter<File>> {
    sink: Option<W>,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Append to `path`. An unopenable file yields a disabled log.
    pub fn open(path: impl AsRef<Path>) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::with_writer(BufWriter::new(file)),
            Err(_) => Self::disabled(),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn with_writer(sink: W) -> Self {
        Self {
            sink: Some(sink),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, event: &SessionEvent) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        let record = Record {
            ts_ms: now_ms(),
            event,
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if sink.write_all(&self.buf).is_err() || sink.flush().is_err() {
            self.sink = None;
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.sink
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_are_tagged_json_lines() {
        let mut log = EventLog::with_writer(Vec::new());
        log.record(&SessionEvent::Pause { episode: 2 });
        log.record(&SessionEvent::Lock {
            episode: 2,
            lines_cleared: 4,
            points: 1200,
            score: 1240,
            level: 1,
        });

        let out = log.into_inner().unwrap();
        let lines: Vec<Value> = std::str::from_utf8(&out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "pause");
        assert_eq!(lines[0]["episode"], 2);
        assert!(lines[0]["ts_ms"].is_u64());
        assert_eq!(lines[1]["event"], "lock");
        assert_eq!(lines[1]["lines_cleared"], 4);
        assert_eq!(lines[1]["points"], 1200);
    }

    #[test]
    fn write_failure_disables_log() {
        let mut log = EventLog::with_writer(Broken);
        assert!(log.is_enabled());
        log.record(&SessionEvent::Resume { episode: 0 });
        assert!(!log.is_enabled());
    }

    #[test]
    fn disabled_log_ignores_events() {
        let mut log: EventLog<Vec<u8>> = EventLog::disabled();
        log.record(&SessionEvent::Restart { episode: 1 });
        assert!(log.into_inner().is_none());
    }
}
