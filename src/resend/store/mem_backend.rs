use super::StorageBackend;
use crate::error::{ResendError, Result};
use crate::model::ConfigDocument;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the CLI is single-threaded,
/// which lets `StorageBackend` keep `&self` on every method.
#[derive(Default)]
pub struct MemBackend {
    doc: RefCell<Option<ConfigDocument>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: ConfigDocument) -> Self {
        let backend = Self::new();
        *backend.doc.borrow_mut() = Some(doc);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<ConfigDocument>> {
        Ok(self.doc.borrow().clone())
    }

    fn save(&self, doc: &ConfigDocument) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ResendError::Store("Simulated write error".to_string()));
        }
        *self.doc.borrow_mut() = Some(doc.clone());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://config.json")
    }
}
