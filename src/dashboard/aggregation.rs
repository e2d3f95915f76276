//! Summarises the recorded transactions for the dashboard and the report API.
//!
//! The summary is a pure function of the transaction list, so it is
//! recomputed from scratch on every request. Sums saturate at the limits of
//! [Decimal] instead of overflowing.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::transaction::{Transaction, TransactionType};

/// The total amount recorded under one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category label, e.g. "Salary".
    pub category: String,
    /// The sum of the amounts of every transaction in this category.
    pub total: Decimal,
}

/// How income was split between spending and savings.
///
/// Expenses are capped at the total income so that overspending never shows
/// up as a negative slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Allocation {
    /// The total expense, capped at the total income.
    pub displayed_expense: Decimal,
    /// The income left over after expenses, never negative.
    pub savings: Decimal,
}

impl Allocation {
    /// The share of the allocation taken by expenses, from 0 to 100.
    pub fn expense_percentage(&self) -> Decimal {
        self.percentage_of_total(self.displayed_expense)
    }

    /// The share of the allocation kept as savings, from 0 to 100.
    pub fn savings_percentage(&self) -> Decimal {
        self.percentage_of_total(self.savings)
    }

    fn percentage_of_total(&self, part: Decimal) -> Decimal {
        let total = self.displayed_expense.saturating_add(self.savings);

        if total.is_zero() {
            Decimal::ZERO
        } else {
            part / total * Decimal::ONE_HUNDRED
        }
    }
}

/// The figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Income totals per category, in order of first appearance.
    pub income_by_category: Vec<CategoryTotal>,
    /// Expense totals per category, in order of first appearance.
    pub expense_by_category: Vec<CategoryTotal>,
    /// The sum of all income.
    pub total_income: Decimal,
    /// The sum of all expenses.
    pub total_expense: Decimal,
    /// Total income minus total expense, may be negative.
    pub balance: Decimal,
    /// The income allocation, absent when there is no income or nothing to
    /// show for it.
    pub allocation: Option<Allocation>,
}

/// Summarise `transactions` into per-category totals, headline figures and
/// the income allocation.
///
/// Never fails. An empty slice gives zero totals, no categories and no
/// allocation.
pub fn summarize(transactions: &[Transaction]) -> Report {
    let income_by_category = totals_by_category(transactions, TransactionType::Income);
    let expense_by_category = totals_by_category(transactions, TransactionType::Expense);

    let total_income = sum_totals(&income_by_category);
    let total_expense = sum_totals(&expense_by_category);
    let balance = total_income.saturating_sub(total_expense);

    Report {
        allocation: allocate_income(total_income, total_expense),
        income_by_category,
        expense_by_category,
        total_income,
        total_expense,
        balance,
    }
}

/// Sum the amounts of the transactions of `type_` per category.
///
/// Categories are listed in the order they first appear in `transactions`.
fn totals_by_category(
    transactions: &[Transaction],
    type_: TransactionType,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.type_ == type_) {
        match totals
            .iter_mut()
            .find(|total| total.category == transaction.category)
        {
            Some(total) => total.total = total.total.saturating_add(transaction.amount),
            None => totals.push(CategoryTotal {
                category: transaction.category.clone(),
                total: transaction.amount,
            }),
        }
    }

    totals
}

fn sum_totals(totals: &[CategoryTotal]) -> Decimal {
    totals
        .iter()
        .fold(Decimal::ZERO, |sum, total| sum.saturating_add(total.total))
}

fn allocate_income(total_income: Decimal, total_expense: Decimal) -> Option<Allocation> {
    if total_income <= Decimal::ZERO {
        return None;
    }

    let displayed_expense = total_expense.min(total_income);
    let savings = total_income
        .saturating_sub(total_expense)
        .max(Decimal::ZERO);

    if displayed_expense.is_zero() && savings.is_zero() {
        return None;
    }

    Some(Allocation {
        displayed_expense,
        savings,
    })
}
