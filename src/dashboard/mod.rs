//! Dashboard module
//!
//! Provides the overview page with the new transaction form, pie charts of the
//! recorded income and expenses, and the headline totals.

mod aggregation;
mod cards;
mod charts;
mod handlers;

pub use aggregation::{Allocation, CategoryTotal, Report, summarize};
pub use handlers::{get_dashboard_page, get_report};
