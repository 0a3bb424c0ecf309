//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_upload`], which:
//!
//! - picks the parser from the filename extension (or an explicit [`IngestOptions::format`])
//! - parses the upload bytes into an in-memory [`crate::types::Table`]
//! - runs the decimal-separator normalization pass (unless disabled)
//! - optionally reports success/failure/alerts to an [`UploadObserver`]
//!
//! Format-specific functions are also available under [`csv`] and [`excel`], and the
//! normalization pass under [`normalize`].

pub mod csv;
pub mod excel;
pub mod normalize;
pub mod observability;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ProfileError, ProfileResult};
use crate::types::Table;

pub use observability::{
    CompositeObserver, FileObserver, IngestContext, IngestStats, Severity, StdErrObserver,
    UploadObserver,
};

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    /// Comma-separated values.
    Csv,
    /// OOXML spreadsheet.
    Xlsx,
    /// Legacy binary spreadsheet.
    Xls,
}

impl UploadFormat {
    /// Parse an upload format from a file extension.
    ///
    /// Matching is case-sensitive on the literal suffix: `CSV` is not recognized.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }
}

/// Options controlling upload ingestion.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestOptions {
    /// If `None`, the format is taken from the filename extension.
    pub format: Option<UploadFormat>,
    /// Run the decimal-separator normalization pass after parsing.
    pub normalize_decimals: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn UploadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl fmt::Debug for IngestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestOptions")
            .field("format", &self.format)
            .field("normalize_decimals", &self.normalize_decimals)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            format: None,
            normalize_decimals: true,
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

/// Ingest one uploaded file into an in-memory [`Table`].
///
/// The caller hands over the fully read upload bytes; a partially consumed stream
/// must be rewound before reading.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```
/// use data_profiler::ingestion::{ingest_upload, IngestOptions};
///
/// # fn main() -> Result<(), data_profiler::ProfileError> {
/// let upload = b"id,name\n1,Ada\n2,Grace\n";
/// let table = ingest_upload(upload, "people.csv", &IngestOptions::default())?;
/// assert_eq!(table.row_count(), 2);
/// # Ok(())
/// # }
/// ```
///
/// Unrecognized extensions are rejected up front:
///
/// ```
/// use data_profiler::ingestion::{ingest_upload, IngestOptions};
/// use data_profiler::ProfileError;
///
/// let err = ingest_upload(b"data", "notes.txt", &IngestOptions::default()).unwrap_err();
/// assert!(matches!(err, ProfileError::UnsupportedFormat { .. }));
/// ```
pub fn ingest_upload(
    bytes: &[u8],
    file_name: &str,
    options: &IngestOptions,
) -> ProfileResult<Table> {
    let format = resolve_format(file_name, options)?;
    let ctx = IngestContext {
        file_name: file_name.to_owned(),
        format,
    };

    let result = ingest_resolved(bytes, format, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((table, normalized_columns)) => obs.on_success(
                &ctx,
                IngestStats {
                    rows: table.row_count(),
                    columns: table.column_count(),
                    normalized_columns: *normalized_columns,
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|(table, _)| table)
}

/// Ingest a file from disk, using its file name for format dispatch.
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestOptions) -> ProfileResult<Table> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    ingest_upload(&bytes, file_name, options)
}

/// Resolve the parse format for an upload: an explicit [`IngestOptions::format`]
/// wins, otherwise the filename extension decides.
pub fn resolve_format(file_name: &str, options: &IngestOptions) -> ProfileResult<UploadFormat> {
    if let Some(format) = options.format {
        return Ok(format);
    }
    let ext = literal_extension(file_name);
    UploadFormat::from_extension(ext).ok_or_else(|| ProfileError::UnsupportedFormat {
        extension: ext.to_owned(),
    })
}

fn ingest_resolved(
    bytes: &[u8],
    format: UploadFormat,
    options: &IngestOptions,
) -> ProfileResult<(Table, usize)> {
    if bytes.is_empty() {
        return Err(ProfileError::EmptyInput);
    }

    let mut table = match format {
        UploadFormat::Csv => csv::parse_csv(bytes),
        UploadFormat::Xlsx => excel::parse_xlsx(bytes),
        UploadFormat::Xls => excel::parse_xls(bytes),
    }?;

    let normalized_columns = if options.normalize_decimals {
        normalize::normalize_decimal_separators(&mut table).len()
    } else {
        0
    };

    Ok((table, normalized_columns))
}

fn severity_for_error(e: &ProfileError) -> Severity {
    match e {
        ProfileError::Io(_) => Severity::Critical,
        ProfileError::UnsupportedFormat { .. }
        | ProfileError::MalformedInput { .. }
        | ProfileError::EmptyInput
        | ProfileError::DegenerateInput { .. } => Severity::Error,
    }
}

/// The suffix after the last `.`, or the whole name when there is no dot.
fn literal_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}
