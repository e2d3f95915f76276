//! Finance Tracker is a web app for logging income and expenses and seeing
//! where the money goes.
//!
//! This library provides a REST API that directly serves HTML pages. All data
//! is held in memory for the lifetime of the server process.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod navigation;
mod not_found;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use dashboard::{Allocation, CategoryTotal, Report, summarize};
pub use routing::build_router;
pub use transaction::{
    EditSession, MAX_AMOUNT, NewTransaction, Transaction, TransactionId, TransactionStore,
    TransactionType,
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFound};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction breaks one of the transaction invariants: the amount
    /// must be greater than zero and the category must belong to the
    /// vocabulary of the transaction type.
    ///
    /// The string describes which rule was broken and is safe to show to the
    /// user.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// A positional operation referred to a position past the end of the
    /// transaction list.
    #[error("index {index} is out of range for {len} transactions")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of transactions at the time of the request.
        len: usize,
    },

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Could not acquire the transaction store lock
    #[error("could not acquire the transaction store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFound.into_response(),
            Error::StoreLockError => InternalServerError::StoreUnavailable.into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::Unexpected.into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidTransaction(reason) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid transaction",
                    &format!("{reason}. Check the form and try again."),
                ),
            )
                .into_response(),
            Error::UpdateMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not update transaction",
                    "The transaction could not be found. \
                    It may have been deleted while you were editing it.",
                ),
            )
                .into_response(),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not delete transaction",
                    "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted.",
                ),
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
                    .into_response()
            }
        }
    }
}
