//! Alert messages that htmx swaps into the page's alert container.
//!
//! Endpoints return an alert together with an error status code, and forms
//! use `hx-target-error="#alert-container"` to display it.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// An error message with an explanation of how to fix it.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// The headline of the alert.
    pub message: String,
    /// Extra context, e.g. what the user can do about the error.
    pub details: String,
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as an out-of-band swap for `#alert-container`.
    pub fn into_html(self) -> Markup {
        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    role="alert"
                    class="flex items-start justify-between p-4 mb-4 text-sm
                        text-red-800 border border-red-300 rounded-lg bg-red-50
                        dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
                {
                    div
                    {
                        p class="font-medium" { (self.message) }

                        @if !self.details.is_empty() {
                            p class="mt-1" { (self.details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Close"
                        onclick="this.closest('[role=alert]').remove()"
                        class="ms-4 font-bold"
                    {
                        "×"
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
