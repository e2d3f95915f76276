//! Defines the route handler for the page that lists all recorded transactions.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_store,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, link,
    },
    navigation::NavBar,
    transaction::{Transaction, TransactionStore},
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The store holding the transactions to list.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the transactions page, listing transactions in the order they were recorded.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let transactions = lock_store(&state.store)?.list().to_vec();

    Ok(transactions_view(&transactions).into_response())
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let table_row = |number: usize, transaction: &Transaction| {
        let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
        let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);
        let confirm_message = format!(
            "Are you sure you want to delete transaction #{number} ({})?",
            transaction.category
        );

        html!(
            tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
            {
                td class=(TABLE_CELL_STYLE) { "#" (number) }

                td class=(TABLE_CELL_STYLE) { (transaction.type_) }

                td class=(TABLE_CELL_STYLE)
                {
                    (format_currency(transaction.amount)) " (" (transaction.category) ")"
                }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                        button
                            type="button"
                            hx-delete=(delete_url)
                            hx-confirm=(confirm_message)
                            hx-target-error="#alert-container"
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Delete"
                        }
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    (link(endpoints::DASHBOARD_VIEW, "Add Transaction"))
                }

                section class="dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for (index, transaction) in transactions.iter().enumerate() {
                                (table_row(index + 1, transaction))
                            }

                            @if transactions.is_empty() {
                                tr
                                {
                                    td
                                        colspan="4"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "Your transactions will be listed here."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Transactions", &[], &content)
}
