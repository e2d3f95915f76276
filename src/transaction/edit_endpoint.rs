use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState,
    app_state::lock_store,
    endpoints,
    transaction::{EditSession, NewTransaction, TransactionId, TransactionStore},
};

/// The state needed to edit a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The store holding the transaction being edited.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that saves the edit form over an existing transaction and
/// redirects to the transactions page.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<NewTransaction>,
) -> Response {
    let mut store = match lock_store(&state.store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match EditSession::resume(transaction_id).commit(&mut store, form) {
        Ok(transaction) => {
            tracing::info!(
                "Updated transaction {} to {} ({}, {})",
                transaction.id,
                transaction.type_,
                transaction.category,
                transaction.amount
            );

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::warn!("Could not update transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
