//! `data-profiler` is a small library for turning an uploaded tabular file into an
//! in-memory [`types::Table`] and the data-quality statistics a profiling dashboard
//! renders above it.
//!
//! The primary entrypoints are [`ingestion::ingest_upload`] (bytes + filename, the
//! upload-shaped path) and [`quality::QualityReport::compute`].
//!
//! ## What you can ingest
//!
//! **File formats, dispatched by filename extension (case-sensitive on the literal
//! suffix):**
//!
//! - **CSV**: `.csv`
//! - **OOXML spreadsheets**: `.xlsx`
//! - **Legacy binary spreadsheets**: `.xls`
//!
//! Any other extension is rejected as [`ProfileError::UnsupportedFormat`].
//!
//! The first row is the header; per-column types are inferred (integer, float,
//! bool, text) and missing cells become [`types::Value::Null`] — a marker distinct
//! from the empty string. After parsing, a best-effort normalization pass converts
//! text columns whose cells are comma-decimal numbers (`"3,14"`) to floats; a
//! column with any non-coercible cell is left untouched.
//!
//! ## Quick example: upload → table → report
//!
//! ```
//! use data_profiler::ingestion::{ingest_upload, IngestOptions};
//! use data_profiler::quality::QualityReport;
//!
//! # fn main() -> Result<(), data_profiler::ProfileError> {
//! let upload = b"id,name,price\n1,widget,\"1,5\"\n2,gadget,\"2,0\"\n2,gadget,\"2,0\"\n";
//! let table = ingest_upload(upload, "inventory.csv", &IngestOptions::default())?;
//!
//! let report = QualityReport::compute(&table)?;
//! assert_eq!(report.rows, 3);
//! assert_eq!(report.columns, 3);
//! assert_eq!(report.duplicate_rows, 1);
//!
//! // Formatted indicator row for the dashboard.
//! for indicator in report.indicators() {
//!     println!("{indicator}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Caching re-renders
//!
//! A dashboard re-render re-submits the same bytes; [`cache::IngestionCache`] keys
//! ingested tables by a content fingerprint so the parse runs once:
//!
//! ```
//! use data_profiler::cache::IngestionCache;
//! use data_profiler::ingestion::IngestOptions;
//!
//! # fn main() -> Result<(), data_profiler::ProfileError> {
//! let upload = b"id\n1\n2\n";
//! let mut cache = IngestionCache::new();
//! let first = cache.get_or_ingest(upload, "ids.csv", &IngestOptions::default())?;
//! let second = cache.get_or_ingest(upload, "ids.csv", &IngestOptions::default())?;
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: format dispatch, CSV/spreadsheet parsers, normalization, observers
//! - [`types`]: the in-memory table model
//! - [`quality`]: the six-statistic quality report
//! - [`indicators`]: labeled, formatted values for the indicator widgets
//! - [`cache`]: content-fingerprint ingestion cache
//! - [`error`]: the error taxonomy shared across the pipeline

pub mod cache;
pub mod error;
pub mod indicators;
pub mod ingestion;
pub mod quality;
pub mod types;

pub use error::{ProfileError, ProfileResult};
