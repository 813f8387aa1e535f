//! JSONL session event log.
//!
//! One JSON object per line, appended to the file named by `FRUIT_LOG_PATH`.
//! Logging never interrupts the game: if the file cannot be opened or a write
//! fails, the problem is reported once on stderr and the log goes quiet.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::{FrameEvents, GameState, RandomSource, SessionStats};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    SessionStarted { seed: u32 },
    Caught { count: u32 },
    Exploded { count: u32 },
    GameOver { stats: SessionStats },
    ReturnedToMenu,
    Quit,
}

#[derive(Serialize)]
struct LogRecord<'a> {
    ts_ms: u64,
    session_id: u32,
    score: u32,
    #[serde(flatten)]
    event: &'a LogEvent,
}

pub struct EventLog {
    out: Option<Box<dyn Write + Send>>,
    buf: Vec<u8>,
    written: u64,
}

impl EventLog {
    /// A log that drops everything.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            written: 0,
        }
    }

    /// Log into an arbitrary writer.
    pub fn to_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
            buf: Vec::with_capacity(256),
            written: 0,
        }
    }

    /// Append to `path`, or a disabled log when `path` is `None` or unopenable.
    pub fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::disabled();
        };
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::to_writer(BufWriter::new(file)),
            Err(e) => {
                eprintln!("[fruit-catcher] event log: cannot open {}: {}", path.display(), e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Number of lines successfully written.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn record(&mut self, ts_ms: u64, session_id: u32, score: u32, event: &LogEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let rec = LogRecord {
            ts_ms,
            session_id,
            score,
            event,
        };
        if serde_json::to_writer(&mut self.buf, &rec).is_err() {
            return;
        }
        self.buf.push(b'\n');

        let result = out.write_all(&self.buf).and_then(|_| out.flush());
        match result {
            Ok(()) => self.written += 1,
            Err(e) => {
                eprintln!("[fruit-catcher] event log: write failed, disabling: {}", e);
                self.out = None;
            }
        }
    }

    /// Log what a frame update produced.
    pub fn record_frame<R: RandomSource>(
        &mut self,
        ts_ms: u64,
        game: &GameState<R>,
        events: &FrameEvents,
    ) {
        if !self.is_enabled() {
            return;
        }
        let (id, score) = (game.session_id(), game.score());
        if events.caught > 0 {
            self.record(ts_ms, id, score, &LogEvent::Caught { count: events.caught });
        }
        if events.exploded > 0 {
            self.record(ts_ms, id, score, &LogEvent::Exploded { count: events.exploded });
        }
        if events.game_over {
            let stats = game.session().map(|s| s.stats()).unwrap_or_default();
            self.record(ts_ms, id, score, &LogEvent::GameOver { stats });
        }
    }
}
