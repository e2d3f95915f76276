//! Defines the route handler for the page for editing an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_store,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles, link,
        loading_spinner,
    },
    navigation::NavBar,
    transaction::{
        EditSession, NewTransaction, TransactionId, TransactionStore,
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

/// The state needed for the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The store holding the transaction to edit.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Renders the page for editing a transaction, pre-filled with its current values.
///
/// Responds with the 404 page if the transaction does not exist.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let (session, current) = EditSession::begin(transaction_id, &*lock_store(&state.store)?)
        .inspect_err(|error| tracing::debug!("Cannot edit transaction {transaction_id}: {error}"))?;

    Ok(edit_transaction_view(session, &current).into_response())
}

fn edit_transaction_view(session: EditSession, current: &NewTransaction) -> Markup {
    let update_route = format_endpoint(endpoints::TRANSACTION, session.transaction_id());
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let spinner = loading_spinner();
    let fields = transaction_form_fields(&TransactionFormDefaults {
        transaction_type: current.type_,
        category: Some(current.category.as_str()),
        amount: Some(current.amount),
        autofocus_amount: true,
    });

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(update_route)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Transaction" }

                (fields)

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Update Transaction"
                }

                p class="text-sm text-center"
                {
                    (link(endpoints::TRANSACTIONS_VIEW, "Cancel"))
                }
            }
        }
    };

    base("Edit Transaction", &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rust_decimal::Decimal;
    use scraper::Selector;

    use crate::{
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button_with_text, assert_hx_endpoint,
            assert_status_ok, assert_valid_html, must_get_form, parse_html_document,
        },
        transaction::{
            NewTransaction, TransactionStore, TransactionType,
            edit_page::{EditTransactionPageState, get_edit_transaction_page},
        },
    };

    fn get_state() -> EditTransactionPageState {
        let mut store = TransactionStore::new();
        store
            .add(NewTransaction::new(
                TransactionType::Income,
                "Salary",
                Decimal::ONE_THOUSAND,
            ))
            .expect("could not add test transaction");
        store
            .add(NewTransaction::new(
                TransactionType::Expense,
                "Fuel",
                "12.3".parse().unwrap(),
            ))
            .expect("could not add test transaction");

        EditTransactionPageState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    #[tokio::test]
    async fn renders_form_with_current_values() {
        let state = get_state();

        let response = get_edit_transaction_page(State(state), Path(2))
            .await
            .into_response();

        assert_status_ok(&response);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_hx_endpoint(&form, "/api/transactions/2", "hx-put");
        assert_form_input_with_value(&form, "amount", "number", "12.30");
        assert_form_submit_button_with_text(&form, "Update Transaction");

        let checked_type = form
            .select(&Selector::parse("input[name=type_][checked]").unwrap())
            .next()
            .and_then(|input| input.value().attr("value"));
        assert_eq!(checked_type, Some("expense"));

        let selected_category = form
            .select(&Selector::parse("select[name=category] option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value"));
        assert_eq!(selected_category, Some("Fuel"));
    }

    #[tokio::test]
    async fn missing_transaction_returns_not_found_page() {
        let state = get_state();

        let response = get_edit_transaction_page(State(state), Path(42))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
