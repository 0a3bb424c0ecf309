use thiserror::Error;

/// Convenience result type for ingestion and quality operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Error type shared by ingestion and quality metrics.
///
/// Every failure is surfaced to the caller as one of these typed conditions; the
/// pipeline attempts no recovery and no retries.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Underlying I/O error (path-based ingestion only).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The filename extension does not name a supported format.
    #[error("unsupported format: extension '{extension}' (expected csv, xlsx or xls)")]
    UnsupportedFormat { extension: String },

    /// The format parser rejected the content; the parser's message is attached.
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// The upload holds no data (zero bytes, or no header row).
    #[error("empty input: upload contains no data")]
    EmptyInput,

    /// Percentage metrics are undefined for a zero-row or zero-column table.
    #[error("degenerate input: metrics are undefined for a {rows}x{columns} table")]
    DegenerateInput { rows: usize, columns: usize },
}
