//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for the dashboard page, which holds the new transaction form
//! - The route handler for the JSON report
//! - HTML view functions for rendering the dashboard UI

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_store,
    dashboard::{
        aggregation::{Report, summarize},
        cards::metric_cards_view,
        charts::{build_dashboard_charts, charts_script, charts_view},
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, ECHARTS_SCRIPT_URL, HeadElement, base, dollar_input_styles,
        loading_spinner,
    },
    navigation::NavBar,
    transaction::{TransactionFormDefaults, TransactionStore, transaction_form_fields},
};

/// The state needed for displaying the dashboard page and the report.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store holding the transactions to summarise.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display a page with the new transaction form and an overview of the recorded transactions.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let transactions = lock_store(&state.store)?.list().to_vec();

    if transactions.is_empty() {
        return Ok(dashboard_no_data_view().into_response());
    }

    let report = summarize(&transactions);

    Ok(dashboard_view(&report).into_response())
}

/// Return the summary of the recorded transactions as JSON.
pub async fn get_report(State(state): State<DashboardState>) -> Result<Json<Report>, Error> {
    let transactions = lock_store(&state.store)?.list().to_vec();

    Ok(Json(summarize(&transactions)))
}

fn new_transaction_form() -> Markup {
    let create_transaction_route = endpoints::TRANSACTIONS_API;
    let spinner = loading_spinner();
    let fields = transaction_form_fields(&TransactionFormDefaults::default());

    html! {
        section class="w-full max-w-md mx-auto mb-8"
        {
            form
                hx-post=(create_transaction_route)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Add Transaction" }

                (fields)

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Add Transaction"
                }
            }
        }
    }
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let form = new_transaction_form();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            (form)

            p id="dashboard-placeholder" class="text-gray-600 dark:text-gray-400"
            {
                "Dashboard will appear here once you add a transaction."
            }
        }
    );

    base("Dashboard", &[dollar_input_styles()], &content)
}

/// Renders the main dashboard page with the entry form, charts and headline metrics.
fn dashboard_view(report: &Report) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let form = new_transaction_form();
    let charts = build_dashboard_charts(report);

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (form)

            (charts_view(&charts))

            (metric_cards_view(report))
        }
    );

    let head_elements = [
        dollar_input_styles(),
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &head_elements, &content)
}
