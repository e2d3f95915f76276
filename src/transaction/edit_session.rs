//! Tracks the transaction that is currently being edited.

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId, TransactionStore},
};

/// An in-progress edit of a single transaction.
///
/// The session refers to the transaction by ID, so deleting other transactions
/// while the edit form is open does not change which transaction the edit
/// applies to. If the transaction itself is deleted, [EditSession::commit]
/// fails instead of overwriting whichever transaction moved into its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSession {
    transaction_id: TransactionId,
}

impl EditSession {
    /// Start editing the transaction with the given `id`.
    ///
    /// Returns the session and the current values of the transaction, which
    /// are used to pre-populate the edit form.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no transaction with this ID.
    pub fn begin(
        id: TransactionId,
        store: &TransactionStore,
    ) -> Result<(Self, NewTransaction), Error> {
        let transaction = store.get(id).ok_or(Error::NotFound)?;

        let prefill = NewTransaction {
            type_: transaction.type_,
            category: transaction.category.clone(),
            amount: transaction.amount,
        };

        Ok((Self { transaction_id: id }, prefill))
    }

    /// Pick up an edit that was started earlier, e.g. by a previous request.
    pub fn resume(id: TransactionId) -> Self {
        Self { transaction_id: id }
    }

    /// The ID of the transaction being edited.
    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    /// Save `new` over the transaction being edited, ending the session.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if the transaction was deleted
    /// since the session started, or [Error::InvalidTransaction] if `new`
    /// breaks the transaction invariants.
    pub fn commit(
        self,
        store: &mut TransactionStore,
        new: NewTransaction,
    ) -> Result<Transaction, Error> {
        store.update_by_id(self.transaction_id, new)
    }
}
