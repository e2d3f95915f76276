use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    app_state::lock_store,
    transaction::{Transaction, TransactionStore},
};

/// The state needed to list transactions as JSON.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The store holding the transactions to list.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that returns every transaction, in insertion order, as a JSON array.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let store = lock_store(&state.store)?;

    Ok(Json(store.list().to_vec()))
}
