//! Durable storage for the cart snapshot.
//!
//! The cart is written to a single device-scoped key-value slot holding a JSON
//! array of [`CartEntry`] records. [`CartSlot`] is the raw slot;
//! [`CartPersistence`] layers encoding on top and absorbs every failure:
//!
//! - `load` returns an empty cart when the slot is empty, unreadable or holds
//!   anything that does not decode into a valid snapshot
//! - `save` logs a failed write and drops it; the in-memory cart stays
//!   authoritative and nothing is retried

use std::collections::HashSet;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use hobnail_core::CartEntry;
use thiserror::Error;
use tracing::{debug, warn};

/// Key of the slot the cart is stored under.
pub const CART_SLOT_KEY: &str = "cart";

/// Errors raised while reading or writing the cart slot.
///
/// These never escape [`CartPersistence::load`] or [`CartPersistence::save`];
/// the fallible `try_` variants expose them for callers that want to report.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The slot could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded.
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored value is not a JSON array of cart entries.
    #[error("failed to decode saved cart: {0}")]
    Decode(#[source] serde_json::Error),

    /// The stored value decoded but breaks a cart invariant.
    #[error("saved cart is invalid: {0}")]
    Invalid(String),

    /// The slot refused the operation.
    #[error("cart slot unavailable: {0}")]
    Unavailable(String),
}

/// A device-scoped key-value slot holding the serialized cart.
pub trait CartSlot: Send {
    /// Read the stored value, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&self, value: &str) -> Result<(), PersistenceError>;
}

// =============================================================================
// File Slot
// =============================================================================

/// Slot backed by a single JSON file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// File name of the slot inside the data directory.
    pub const FILE_NAME: &'static str = "cart.json";

    /// Slot stored as [`Self::FILE_NAME`] inside `dir`.
    ///
    /// The directory is created on the first write.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(Self::FILE_NAME),
        }
    }

    /// Full path of the slot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CartSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&self, value: &str) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        // Write beside the slot and rename so a crash never leaves half a file.
        let staging = self.path.with_extension("json.tmp");
        std::fs::write(&staging, value).map_err(|e| self.io_error(e))?;
        std::fs::rename(&staging, &self.path).map_err(|e| self.io_error(e))
    }
}

// =============================================================================
// Memory Slot
// =============================================================================

/// Slot held in memory, shared between clones.
///
/// Useful for ephemeral sessions and for tests that need to inspect or corrupt
/// what was saved, or to reopen a store over the same value.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    inner: Arc<Mutex<MemorySlotState>>,
}

#[derive(Debug, Default)]
struct MemorySlotState {
    value: Option<String>,
    reject_writes: bool,
}

impl MemorySlot {
    /// Empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let slot = Self::default();
        slot.state().value = Some(value.into());
        slot
    }

    /// Currently stored value.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.state().value.clone()
    }

    /// Make subsequent writes fail with [`PersistenceError::Unavailable`].
    pub fn reject_writes(&self, reject: bool) {
        self.state().reject_writes = reject;
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MemorySlotState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.value())
    }

    fn write(&self, value: &str) -> Result<(), PersistenceError> {
        let mut state = self.state();
        if state.reject_writes {
            return Err(PersistenceError::Unavailable("writes rejected".to_string()));
        }
        state.value = Some(value.to_owned());
        Ok(())
    }
}

// =============================================================================
// Cart Persistence
// =============================================================================

/// JSON load/save of the cart snapshot through a [`CartSlot`].
pub struct CartPersistence {
    slot: Box<dyn CartSlot>,
}

impl fmt::Debug for CartPersistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartPersistence").finish_non_exhaustive()
    }
}

impl CartPersistence {
    #[must_use]
    pub fn new(slot: impl CartSlot + 'static) -> Self {
        Self {
            slot: Box::new(slot),
        }
    }

    /// Load the saved snapshot, falling back to an empty cart on any failure.
    #[must_use]
    pub fn load(&self) -> Vec<CartEntry> {
        self.try_load().unwrap_or_else(|e| {
            warn!(slot = CART_SLOT_KEY, error = %e, "Discarding unreadable saved cart");
            Vec::new()
        })
    }

    /// Load the saved snapshot.
    ///
    /// An empty slot yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read, the value is not valid
    /// JSON for a list of entries, or two entries share a product id.
    pub fn try_load(&self) -> Result<Vec<CartEntry>, PersistenceError> {
        let Some(raw) = self.slot.read()? else {
            debug!(slot = CART_SLOT_KEY, "No saved cart");
            return Ok(Vec::new());
        };

        let entries: Vec<CartEntry> =
            serde_json::from_str(&raw).map_err(PersistenceError::Decode)?;

        let mut seen = HashSet::with_capacity(entries.len());
        if let Some(duplicate) = entries.iter().find(|e| !seen.insert(e.product_id)) {
            return Err(PersistenceError::Invalid(format!(
                "product {} appears more than once",
                duplicate.product_id
            )));
        }

        Ok(entries)
    }

    /// Save the snapshot, logging and dropping any failure.
    pub fn save(&self, entries: &[CartEntry]) {
        if let Err(e) = self.try_save(entries) {
            warn!(slot = CART_SLOT_KEY, error = %e, "Failed to save cart");
        }
    }

    /// Save the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the slot write fails.
    pub fn try_save(&self, entries: &[CartEntry]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(entries).map_err(PersistenceError::Encode)?;
        self.slot.write(&raw)
    }
}
