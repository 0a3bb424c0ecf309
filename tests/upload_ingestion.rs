use std::sync::{Arc, Mutex};

use data_profiler::ingestion::{
    ingest_from_path, ingest_upload, IngestContext, IngestOptions, IngestStats, Severity,
    UploadFormat, UploadObserver,
};
use data_profiler::ProfileError;

const PEOPLE: &[u8] = b"id,name\n1,Ada\n2,Grace\n";

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl UploadObserver for RecordingObserver {
    fn on_success(&self, ctx: &IngestContext, stats: IngestStats) {
        self.events.lock().unwrap().push(format!(
            "ok file={} rows={} cols={}",
            ctx.file_name, stats.rows, stats.columns
        ));
    }

    fn on_failure(&self, ctx: &IngestContext, severity: Severity, error: &ProfileError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("fail sev={severity:?} file={} err={error}", ctx.file_name));
    }

    fn on_alert(&self, ctx: &IngestContext, severity: Severity, _error: &ProfileError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("ALERT sev={severity:?} file={}", ctx.file_name));
    }
}

#[test]
fn txt_extension_is_unsupported() {
    let err = ingest_upload(PEOPLE, "people.txt", &IngestOptions::default()).unwrap_err();
    match err {
        ProfileError::UnsupportedFormat { extension } => assert_eq!(extension, "txt"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn uppercase_extension_is_unsupported() {
    // Dispatch is case-sensitive on the literal suffix.
    let err = ingest_upload(PEOPLE, "people.CSV", &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, ProfileError::UnsupportedFormat { .. }));
}

#[test]
fn explicit_format_overrides_extension() {
    let opts = IngestOptions {
        format: Some(UploadFormat::Csv),
        ..Default::default()
    };
    let table = ingest_upload(PEOPLE, "export.dat", &opts).unwrap();
    assert_eq!(table.row_count(), 2);
}

#[test]
fn csv_bytes_under_xlsx_extension_are_malformed() {
    let err = ingest_upload(PEOPLE, "people.xlsx", &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, ProfileError::MalformedInput { .. }));
}

#[test]
fn observer_sees_success_with_stats() {
    let observer = Arc::new(RecordingObserver::default());
    let opts = IngestOptions {
        observer: Some(observer.clone()),
        ..Default::default()
    };

    ingest_upload(PEOPLE, "people.csv", &opts).unwrap();

    let events = observer.events();
    assert_eq!(events, vec!["ok file=people.csv rows=2 cols=2"]);
}

#[test]
fn observer_sees_failure_without_alert_below_threshold() {
    let observer = Arc::new(RecordingObserver::default());
    let opts = IngestOptions {
        observer: Some(observer.clone()),
        alert_at_or_above: Severity::Critical,
        ..Default::default()
    };

    let _ = ingest_upload(b"", "empty.csv", &opts).unwrap_err();

    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].starts_with("fail sev=Error"));
}

#[test]
fn observer_alerts_at_threshold() {
    let observer = Arc::new(RecordingObserver::default());
    let opts = IngestOptions {
        observer: Some(observer.clone()),
        alert_at_or_above: Severity::Error,
        ..Default::default()
    };

    let _ = ingest_upload(b"", "empty.csv", &opts).unwrap_err();

    let events = observer.events();
    assert_eq!(events.len(), 2);
    assert!(events[1].starts_with("ALERT sev=Error"));
}

#[test]
fn ingest_from_path_uses_the_file_name() {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("data-profiler-{nanos}.csv"));
    std::fs::write(&path, PEOPLE).unwrap();

    let table = ingest_from_path(&path, &IngestOptions::default()).unwrap();
    assert_eq!(table.row_count(), 2);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn ingest_from_path_missing_file_is_io() {
    let err = ingest_from_path("/nonexistent/people.csv", &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, ProfileError::Io(_)));
}
