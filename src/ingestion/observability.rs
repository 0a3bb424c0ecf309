use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ProfileError;

use super::UploadFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the upload was rejected).
    Error,
    /// Critical error (I/O or other infrastructure failures).
    Critical,
}

/// Context about one upload ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestContext {
    /// Filename the upload arrived with.
    pub file_name: String,
    /// Format used for parsing.
    pub format: UploadFormat,
}

/// Stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Number of ingested data rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Number of columns converted by the decimal-separator pass.
    pub normalized_columns: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait UploadObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestContext, _stats: IngestStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestContext, _severity: Severity, _error: &ProfileError) {}

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestContext, severity: Severity, error: &ProfileError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn UploadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn UploadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl UploadObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestContext, stats: IngestStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestContext, severity: Severity, error: &ProfileError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestContext, severity: Severity, error: &ProfileError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs ingestion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl UploadObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestContext, stats: IngestStats) {
        eprintln!(
            "[ingest][ok] format={:?} file={} rows={} cols={} normalized={}",
            ctx.format, ctx.file_name, stats.rows, stats.columns, stats.normalized_columns
        );
    }

    fn on_failure(&self, ctx: &IngestContext, severity: Severity, error: &ProfileError) {
        eprintln!(
            "[ingest][{:?}] format={:?} file={} err={}",
            severity, ctx.format, ctx.file_name, error
        );
    }

    fn on_alert(&self, ctx: &IngestContext, severity: Severity, error: &ProfileError) {
        eprintln!(
            "[ALERT][ingest][{:?}] format={:?} file={} err={}",
            severity, ctx.format, ctx.file_name, error
        );
    }
}

/// Appends ingestion events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl UploadObserver for FileObserver {
    fn on_success(&self, ctx: &IngestContext, stats: IngestStats) {
        self.append_line(&format!(
            "{} ok format={:?} file={} rows={} cols={} normalized={}",
            unix_ts(),
            ctx.format,
            ctx.file_name,
            stats.rows,
            stats.columns,
            stats.normalized_columns
        ));
    }

    fn on_failure(&self, ctx: &IngestContext, severity: Severity, error: &ProfileError) {
        self.append_line(&format!(
            "{} fail severity={:?} format={:?} file={} err={}",
            unix_ts(),
            severity,
            ctx.format,
            ctx.file_name,
            error
        ));
    }

    fn on_alert(&self, ctx: &IngestContext, severity: Severity, error: &ProfileError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} format={:?} file={} err={}",
            unix_ts(),
            severity,
            ctx.format,
            ctx.file_name,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
