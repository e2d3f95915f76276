//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions recorded since the server started.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] with an empty transaction store.
    pub fn new() -> Self {
        Self::with_store(TransactionStore::new())
    }

    /// Create a new [AppState] that serves the transactions in `store`.
    pub fn with_store(store: TransactionStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Acquire the lock on the transaction store.
///
/// # Errors
/// Returns [Error::StoreLockError] if another thread panicked while holding the lock.
pub(crate) fn lock_store(
    store: &Mutex<TransactionStore>,
) -> Result<MutexGuard<'_, TransactionStore>, Error> {
    store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)
}
