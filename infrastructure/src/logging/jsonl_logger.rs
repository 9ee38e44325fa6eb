//! JSONL file writer for round events.
//!
//! Each [`RoundEvent`] becomes one JSON line carrying `type`, `timestamp`
//! and `request` (an id shared by every line of one council request).
//! The file is opened in append mode so successive runs share a transcript.

use council_application::{RoundEvent, RoundLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL round logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every line.
pub struct JsonlRoundLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    request_id: String,
}

impl JsonlRoundLogger {
    /// Open (or create) the transcript at `path`.
    ///
    /// Creates parent directories as needed. Returns `None`, after a
    /// warning, if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, request_id: impl Into<String>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            request_id: request_id.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(&self, event: RoundEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        map.insert("request".to_string(), Value::from(self.request_id.as_str()));
        Value::Object(map)
    }
}

impl RoundLogger for JsonlRoundLogger {
    fn log(&self, event: RoundEvent) {
        let Ok(line) = serde_json::to_string(&self.record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let logger = JsonlRoundLogger::open(&path, "SO-1").unwrap();

        logger.log(RoundEvent::new("round_started", json!({ "round": 1, "prompt": "p" })));
        logger.log(RoundEvent::new(
            "lineage_response",
            json!({ "round": 1, "lineage": "sophia", "status": "answered", "text": "Hold." }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
            assert_eq!(line["request"], "SO-1");
        }
        assert_eq!(lines[0]["type"], "round_started");
        assert_eq!(lines[0]["round"], 1);
        assert_eq!(lines[1]["lineage"], "sophia");
    }

    #[test]
    fn test_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rounds.jsonl");

        for id in ["a", "b"] {
            let logger = JsonlRoundLogger::open(&path, id).unwrap();
            logger.log(RoundEvent::new("round_completed", json!({ "round": 1 })));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["request"], "a");
        assert_eq!(lines[1]["request"], "b");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let logger = JsonlRoundLogger::open(&path, "x").unwrap();

        logger.log(RoundEvent::new("note", json!("plain")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "plain");
    }

    #[test]
    fn test_unopenable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file
        assert!(JsonlRoundLogger::open(dir.path(), "x").is_none());
    }
}
