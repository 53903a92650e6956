use crate::models::Digit;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Session transitions, written one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Drawn { question: Digit, used: usize },
    Wrong { question: Digit, guess: Digit },
    Solved { question: Digit, misses: usize },
    Finished { questions: usize },
    Reset,
}

/// Opens (or creates) the log file in append mode. Until this succeeds,
/// `log` and `log_event` do nothing.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    if let Ok(mut logger) = LOGGER.lock() {
        *logger = Some(file);
    }
    Ok(())
}

pub fn log(message: &str) {
    // A poisoned lock means a writer panicked mid-line; stop logging.
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = logger.as_mut() {
        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

pub fn log_event(event: &SessionEvent) {
    match serde_json::to_string(event) {
        Ok(json) => log(&json),
        Err(e) => log(&format!("failed to encode event {:?}: {}", event, e)),
    }
}
