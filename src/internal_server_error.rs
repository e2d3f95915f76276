//! The page shown when a request fails because of a fault on the server.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// What went wrong on the server, used to pick the message on the 500 page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalServerError {
    /// A fault with no specific advice for the user.
    Unexpected,
    /// The transaction store cannot be read or written.
    StoreUnavailable,
}

impl InternalServerError {
    fn description(self) -> &'static str {
        match self {
            InternalServerError::Unexpected => "Sorry, something went wrong.",
            InternalServerError::StoreUnavailable => "Your transactions are unavailable.",
        }
    }

    fn fix(self) -> &'static str {
        match self {
            InternalServerError::Unexpected => "Try again later or check the server logs.",
            InternalServerError::StoreUnavailable => {
                "Restart the server to continue. Transactions are kept in memory, \
                so the ones recorded so far will be lost."
            }
        }
    }
}

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        let page = error_view(
            "Internal Server Error",
            "500",
            self.description(),
            self.fix(),
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::Unexpected.into_response()
}
