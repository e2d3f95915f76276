//! Headline metric cards for the dashboard.

use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{dashboard::aggregation::Report, html::format_currency};

struct MetricCard<'a> {
    label: &'a str,
    value: Decimal,
    detail: Option<String>,
}

/// Renders the Total Income, Total Expense and Current Balance cards.
///
/// When there is an income allocation, the expense and balance cards also show
/// their share of income.
pub(super) fn metric_cards_view(report: &Report) -> Markup {
    let cards = [
        MetricCard {
            label: "Total Income",
            value: report.total_income,
            detail: None,
        },
        MetricCard {
            label: "Total Expense",
            value: report.total_expense,
            detail: report.allocation.map(|allocation| {
                format!("{:.1}% of income", allocation.expense_percentage().round_dp(1))
            }),
        },
        MetricCard {
            label: "Current Balance",
            value: report.balance,
            detail: report.allocation.map(|allocation| {
                format!("{:.1}% saved", allocation.savings_percentage().round_dp(1))
            }),
        },
    ];

    html! {
        section
            id="metrics"
            class="w-full mx-auto mb-4 grid grid-cols-1 md:grid-cols-3 gap-4"
        {
            @for card in &cards {
                (metric_card(card))
            }
        }
    }
}

fn metric_card(card: &MetricCard<'_>) -> Markup {
    let value_style = if card.value.is_sign_negative() && !card.value.is_zero() {
        "text-2xl font-bold tabular-nums text-red-600 dark:text-red-400"
    } else {
        "text-2xl font-bold tabular-nums text-gray-900 dark:text-white"
    };

    html! {
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-4 shadow-md"
            data-metric=(card.label)
        {
            h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (card.label) }

            p class=(value_style) { (format_currency(card.value)) }

            @if let Some(detail) = &card.detail {
                p class="text-xs text-gray-500 dark:text-gray-400" { (detail) }
            }
        }
    }
}
