use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState,
    app_state::lock_store,
    endpoints,
    transaction::{TransactionId, TransactionStore},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store to delete the transaction from.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction, redirects to the transactions page on success.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut store = match lock_store(&state.store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match store.remove_by_id(transaction_id) {
        Ok(transaction) => {
            tracing::info!(
                "Deleted transaction {} ({}, {})",
                transaction.id,
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
            tracing::warn!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rust_decimal::Decimal;

    use crate::{
        test_utils::assert_hx_redirect,
        transaction::{
            NewTransaction, TransactionStore, TransactionType,
            delete_endpoint::{DeleteTransactionState, delete_transaction_endpoint},
        },
    };

    fn get_state() -> DeleteTransactionState {
        let mut store = TransactionStore::new();
        for (type_, category) in [
            (TransactionType::Income, "Salary"),
            (TransactionType::Expense, "Rent"),
            (TransactionType::Expense, "Fuel"),
        ] {
            store
                .add(NewTransaction::new(type_, category, Decimal::ONE_HUNDRED))
                .expect("could not add test transaction");
        }

        DeleteTransactionState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    #[tokio::test]
    async fn can_delete_transaction() {
        let state = get_state();

        let response = delete_transaction_endpoint(State(state.clone()), Path(2)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, "/transactions");
        let store = state.store.lock().unwrap();
        let categories: Vec<_> = store
            .list()
            .iter()
            .map(|transaction| transaction.category.as_str())
            .collect();
        assert_eq!(categories, ["Salary", "Fuel"]);
    }

    #[tokio::test]
    async fn deleting_twice_returns_not_found() {
        let state = get_state();

        delete_transaction_endpoint(State(state.clone()), Path(1)).await;
        let response = delete_transaction_endpoint(State(state.clone()), Path(1)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.store.lock().unwrap().len(), 2);
    }
}
