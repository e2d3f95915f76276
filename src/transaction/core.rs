//! Defines the core data models for transactions.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES},
};

/// The largest amount a single transaction may have, one trillion.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// The stable identifier the store assigns to each transaction.
///
/// Unlike a position in the transaction list, an ID does not change when other
/// transactions are deleted.
pub type TransactionId = u64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned or received.
    Income,
    /// Money that was spent or given away.
    Expense,
}

impl TransactionType {
    /// The categories that transactions of this type may use.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            TransactionType::Income => &INCOME_CATEGORIES,
            TransactionType::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// The value used for this type in HTML forms.
    pub fn form_value(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// The details of a transaction before it has been checked and stored.
///
/// Use [NewTransaction::validate] to check the transaction invariants, or let
/// [crate::TransactionStore] do it for you.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Whether this is income or an expense.
    #[serde(rename = "type_")]
    pub type_: TransactionType,
    /// The category, which must belong to the vocabulary of `type_`.
    pub category: String,
    /// The amount of money earned or spent, must be greater than zero.
    pub amount: Decimal,
}

impl NewTransaction {
    /// Create a new, unchecked transaction.
    pub fn new(type_: TransactionType, category: &str, amount: Decimal) -> Self {
        Self {
            type_,
            category: category.to_owned(),
            amount,
        }
    }

    /// Check the transaction invariants.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransaction] if the amount is zero or negative,
    /// if it is larger than [MAX_AMOUNT], if it has fractions of a cent, or if
    /// the category is not one of `type_.categories()`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::InvalidTransaction(format!(
                "the amount must be greater than zero, got {}",
                self.amount
            )));
        }

        if self.amount > MAX_AMOUNT {
            return Err(Error::InvalidTransaction(format!(
                "the amount must be at most {MAX_AMOUNT}, got {}",
                self.amount
            )));
        }

        if self.amount.normalize().scale() > 2 {
            return Err(Error::InvalidTransaction(format!(
                "the amount must be in whole cents, got {}",
                self.amount
            )));
        }

        if !self.type_.categories().contains(&self.category.as_str()) {
            return Err(Error::InvalidTransaction(format!(
                "\"{}\" is not a valid {} category",
                self.category,
                self.type_.form_value()
            )));
        }

        Ok(())
    }
}

/// An income or expense that has been recorded in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The category the transaction belongs to.
    pub category: String,
    /// The amount of money earned or spent.
    pub amount: Decimal,
}

impl Transaction {
    pub(super) fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Self {
            id,
            type_: new.type_,
            category: new.category,
            amount: new.amount,
        }
    }
}
