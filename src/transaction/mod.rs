//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the checks a new transaction must pass
//! - The in-memory `TransactionStore` and the `EditSession` used to edit it
//! - View handlers and endpoints for listing, creating, editing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod edit_session;
mod form;
mod list_endpoint;
mod store;
mod transactions_page;

pub use core::{MAX_AMOUNT, NewTransaction, Transaction, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use edit_session::EditSession;
pub use form::get_category_options;
pub(crate) use form::{TransactionFormDefaults, transaction_form_fields};
pub use list_endpoint::list_transactions_endpoint;
pub use store::TransactionStore;
pub use transactions_page::get_transactions_page;
