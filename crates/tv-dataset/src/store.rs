//! Vendor store: read-once, cached-for-process-lifetime dataset access

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::{info, warn};

use tv_types::{ValidationError, VendorRecord};

/// Failure on the dataset load path.
///
/// Display strings are what the HTTP layer returns to clients, so they stay
/// short and never include the filesystem path.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Vendors dataset not found")]
    NotFound { path: PathBuf },

    #[error("Vendors dataset is corrupt: {0}")]
    Corrupt(String),

    #[error("Invalid vendor record at index {index}: {source}")]
    Validation {
        index: usize,
        source: ValidationError,
    },
}

/// Cache object for the static vendors artifact.
///
/// `load` performs exactly one read-and-validate pass per successful load;
/// every later call returns the cached sequence untouched. A failed load
/// leaves the cell empty, so the next call retries. The cell serializes
/// racing first loads; duplicate work is impossible rather than merely
/// tolerated.
pub struct VendorStore {
    path: PathBuf,
    cache: OnceCell<Arc<Vec<VendorRecord>>>,
    reads: AtomicU64,
}

impl VendorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
            reads: AtomicU64::new(0),
        }
    }

    /// Return the full, validated vendor list, loading it on first call.
    pub fn load(&self) -> Result<Arc<Vec<VendorRecord>>, DatasetError> {
        self.cache
            .get_or_try_init(|| {
                let records = self.read_and_validate().inspect_err(|e| {
                    warn!("Vendor dataset load failed: {}", e);
                })?;
                info!(
                    "Loaded {} vendor records from {}",
                    records.len(),
                    self.path.display()
                );
                Ok(Arc::new(records))
            })
            .map(Arc::clone)
    }

    /// Number of underlying artifact reads performed so far. Test
    /// instrumentation for the one-read-per-process guarantee.
    pub fn source_reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    fn read_and_validate(&self) -> Result<Vec<VendorRecord>, DatasetError> {
        self.reads.fetch_add(1, Ordering::Relaxed);

        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DatasetError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                DatasetError::Corrupt(e.to_string())
            }
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| DatasetError::Corrupt(e.to_string()))?;

        let items = value
            .as_array()
            .ok_or_else(|| DatasetError::Corrupt("expected a JSON array of records".to_string()))?;

        // Fail-fast: the whole load either fully succeeds or fully fails.
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                VendorRecord::from_value(item)
                    .map_err(|source| DatasetError::Validation { index, source })
            })
            .collect()
    }
}
