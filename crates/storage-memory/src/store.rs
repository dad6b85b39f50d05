//! Shared in-memory state backing the repository implementations.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockfolio_core::notes::Note;
use stockfolio_core::stocks::Stock;
use stockfolio_core::transactions::Transaction;
use stockfolio_core::{Error, Result};

/// Process-wide record storage shared by every repository.
///
/// A single `RwLock` guards all three maps, so a stock delete and its
/// cascade over transactions and notes happen under one write lock and
/// readers never observe a half-deleted stock.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Records>,
}

#[derive(Default)]
pub(crate) struct Records {
    pub(crate) stocks: HashMap<String, Stock>,
    pub(crate) transactions: HashMap<String, Transaction>,
    pub(crate) notes: HashMap<String, Note>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Records>> {
        self.inner
            .read()
            .map_err(|_| Error::Repository("memory store lock poisoned".to_string()))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Records>> {
        self.inner
            .write()
            .map_err(|_| Error::Repository("memory store lock poisoned".to_string()))
    }
}
