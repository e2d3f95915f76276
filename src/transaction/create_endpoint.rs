//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, app_state::lock_store, endpoints, transaction::NewTransaction,
    transaction::TransactionStore,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The store that new transactions are added to.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for creating a new transaction, redirects to the dashboard on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<NewTransaction>,
) -> Response {
    let mut store = match lock_store(&state.store) {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match store.add(form) {
        Ok(transaction) => {
            tracing::info!(
                "Added {} transaction {} ({}, {})",
                transaction.type_,
                transaction.id,
                transaction.category,
                transaction.amount
            );

            (
                HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::warn!("Rejected new transaction: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use rust_decimal::Decimal;
    use scraper::Selector;

    use crate::{
        test_utils::{assert_hx_redirect, parse_html_fragment},
        transaction::{
            NewTransaction, TransactionStore, TransactionType,
            create_endpoint::{CreateTransactionState, create_transaction_endpoint},
        },
    };

    fn get_state() -> CreateTransactionState {
        CreateTransactionState {
            store: Arc::new(Mutex::new(TransactionStore::new())),
        }
    }

    fn amount(text: &str) -> Decimal {
        text.parse().expect("could not parse test amount")
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_state();
        let form = NewTransaction::new(TransactionType::Income, "Salary", amount("1000.00"));

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, "/dashboard");
        let store = state.store.lock().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].category, "Salary");
        assert_eq!(store.list()[0].amount, amount("1000.00"));
    }

    #[tokio::test]
    async fn rejects_zero_amount() {
        let state = get_state();
        let form = NewTransaction::new(TransactionType::Expense, "Rent", Decimal::ZERO);

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.lock().unwrap().is_empty());

        let fragment = parse_html_fragment(response).await;
        let alert = fragment
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("alert missing")
            .text()
            .collect::<String>();
        assert!(alert.contains("Invalid transaction"));
        assert!(alert.contains("greater than zero"));
    }

    #[tokio::test]
    async fn rejects_category_of_other_type() {
        let state = get_state();
        let form = NewTransaction::new(TransactionType::Expense, "Salary", amount("10"));

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.lock().unwrap().is_empty());
    }
}
