//! Content-fingerprint cache for ingestion results.
//!
//! A dashboard re-render can re-submit the same upload; re-parsing is avoidable.
//! Entries are keyed by a fingerprint of the upload content, never by filename or
//! widget identity (a filename-keyed cache serves stale tables when content
//! changes under the same name). Eviction is always safe: a miss just re-parses.

use std::collections::HashMap;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::error::ProfileResult;
use crate::ingestion::{ingest_upload, resolve_format, IngestOptions, UploadFormat};
use crate::types::Table;

/// Cache key: SHA-256 over the parse-relevant request (format, normalization flag,
/// upload bytes).
pub type Fingerprint = [u8; 32];

/// Fingerprint an upload under a resolved format.
pub fn fingerprint(format: UploadFormat, normalize_decimals: bool, bytes: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update([format_tag(format), u8::from(normalize_decimals)]);
    hasher.update(bytes);
    hasher.finalize().into()
}

fn format_tag(format: UploadFormat) -> u8 {
    match format {
        UploadFormat::Csv => 0,
        UploadFormat::Xlsx => 1,
        UploadFormat::Xls => 2,
    }
}

/// In-memory cache of ingested tables.
///
/// Tables are immutable once produced and at most one ingestion runs per user
/// interaction, so the cache is a plain map behind a `&mut` receiver.
#[derive(Debug, Default)]
pub struct IngestionCache {
    entries: HashMap<Fingerprint, Arc<Table>>,
}

impl IngestionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for this upload, ingesting on a miss.
    ///
    /// Format resolution errors (e.g. an unsupported extension) surface before any
    /// cache lookup; parse failures are not cached.
    pub fn get_or_ingest(
        &mut self,
        bytes: &[u8],
        file_name: &str,
        options: &IngestOptions,
    ) -> ProfileResult<Arc<Table>> {
        let format = resolve_format(file_name, options)?;
        let key = fingerprint(format, options.normalize_decimals, bytes);
        if let Some(table) = self.entries.get(&key) {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(ingest_upload(bytes, file_name, options)?);
        self.entries.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evict all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
