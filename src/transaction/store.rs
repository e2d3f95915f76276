//! The in-memory transaction store.

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// An ordered list of transactions.
///
/// Positions are 0-based and follow insertion order; removing a transaction
/// shifts every later transaction down by one. Each transaction also gets an
/// ID when it is added, which stays the same for as long as the transaction is
/// in the store and is never handed out again.
///
/// Every mutator validates its input first, so a failed call leaves the store
/// unchanged.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a transaction to the end of the list.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransaction] if `new` breaks the transaction invariants.
    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction, Error> {
        new.validate()?;

        let transaction = Transaction::from_new(self.allocate_id(), new);
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// Replace the transaction at `index`, keeping its ID.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfRange] if `index` is not a current position,
    /// or [Error::InvalidTransaction] if `new` breaks the transaction invariants.
    pub fn update(&mut self, index: usize, new: NewTransaction) -> Result<Transaction, Error> {
        let len = self.transactions.len();
        let slot = self
            .transactions
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;

        new.validate()?;

        *slot = Transaction::from_new(slot.id, new);

        Ok(slot.clone())
    }

    /// Remove the transaction at `index` and return it.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfRange] if `index` is not a current position.
    pub fn remove(&mut self, index: usize) -> Result<Transaction, Error> {
        let len = self.transactions.len();

        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        Ok(self.transactions.remove(index))
    }

    /// The transactions in display order.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get the transaction with the given `id`, if it is still in the store.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// The current position of the transaction with the given `id`.
    pub fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions
            .iter()
            .position(|transaction| transaction.id == id)
    }

    /// Replace the transaction with the given `id`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if no transaction has this ID,
    /// or [Error::InvalidTransaction] if `new` breaks the transaction invariants.
    pub fn update_by_id(
        &mut self,
        id: TransactionId,
        new: NewTransaction,
    ) -> Result<Transaction, Error> {
        let index = self.position(id).ok_or(Error::UpdateMissingTransaction)?;

        self.update(index, new)
    }

    /// Remove the transaction with the given `id` and return it.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if no transaction has this ID.
    pub fn remove_by_id(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let index = self.position(id).ok_or(Error::DeleteMissingTransaction)?;

        self.remove(index)
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn allocate_id(&mut self) -> TransactionId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{
        Error,
        transaction::{NewTransaction, TransactionStore, TransactionType},
    };

    fn amount(text: &str) -> Decimal {
        text.parse().expect("could not parse test amount")
    }

    fn income(category: &str, value: &str) -> NewTransaction {
        NewTransaction::new(TransactionType::Income, category, amount(value))
    }

    fn expense(category: &str, value: &str) -> NewTransaction {
        NewTransaction::new(TransactionType::Expense, category, amount(value))
    }

    fn categories(store: &TransactionStore) -> Vec<&str> {
        store
            .list()
            .iter()
            .map(|transaction| transaction.category.as_str())
            .collect()
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut store = TransactionStore::new();

        store.add(income("Salary", "1000.00")).unwrap();
        store.add(expense("Rent", "500.00")).unwrap();
        store.add(income("Gifts", "200.00")).unwrap();

        assert_eq!(categories(&store), vec!["Salary", "Rent", "Gifts"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut store = TransactionStore::new();

        let first = store.add(expense("Fuel", "60")).unwrap();
        let second = store.add(expense("Fuel", "60")).unwrap();

        assert_eq!(store.len(), 2);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn add_rejects_invalid_transactions() {
        let mut store = TransactionStore::new();

        for new in [
            income("Salary", "0"),
            income("Salary", "-5"),
            income("Groceries", "5"),
        ] {
            assert!(matches!(store.add(new), Err(Error::InvalidTransaction(_))));
        }

        assert!(store.is_empty());
    }

    #[test]
    fn update_replaces_in_place_and_keeps_id() {
        let mut store = TransactionStore::new();
        store.add(income("Salary", "1000")).unwrap();
        let original = store.add(expense("Rent", "500")).unwrap();
        store.add(expense("Fuel", "40")).unwrap();

        let updated = store.update(1, expense("Home Loan", "750")).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(categories(&store), vec!["Salary", "Home Loan", "Fuel"]);
        assert_eq!(store.list()[1].amount, amount("750"));
    }

    #[test]
    fn update_out_of_range_leaves_store_unchanged() {
        let mut store = TransactionStore::new();
        store.add(income("Salary", "1000")).unwrap();
        let before = store.list().to_vec();

        let result = store.update(1, income("Gifts", "10"));

        assert_eq!(result, Err(Error::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn update_rejects_invalid_replacement() {
        let mut store = TransactionStore::new();
        store.add(income("Salary", "1000")).unwrap();
        let before = store.list().to_vec();

        let result = store.update(0, income("Salary", "0"));

        assert!(matches!(result, Err(Error::InvalidTransaction(_))));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn remove_shifts_later_transactions_down() {
        let mut store = TransactionStore::new();
        store.add(income("Salary", "1000")).unwrap();
        store.add(expense("Rent", "500")).unwrap();
        store.add(expense("Groceries", "300")).unwrap();

        let removed = store.remove(0).unwrap();

        assert_eq!(removed.category, "Salary");
        assert_eq!(categories(&store), vec!["Rent", "Groceries"]);
    }

    #[test]
    fn removing_same_index_twice_fails_the_second_time() {
        let mut store = TransactionStore::new();
        store.add(income("Salary", "1000")).unwrap();

        assert!(store.remove(0).is_ok());
        assert_eq!(
            store.remove(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn length_is_adds_minus_removes() {
        let mut store = TransactionStore::new();
        for _ in 0..5 {
            store.add(expense("Transport", "2.50")).unwrap();
        }

        store.remove(4).unwrap();
        store.remove(0).unwrap();

        assert_eq!(store.len(), 3);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = TransactionStore::new();
        let first = store.add(income("Salary", "1")).unwrap();
        store.remove_by_id(first.id).unwrap();

        let second = store.add(income("Salary", "1")).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn default_store_starts_ids_at_one() {
        let mut store = TransactionStore::default();

        let transaction = store.add(income("Interest", "3.21")).unwrap();

        assert_eq!(transaction.id, 1);
    }

    #[test]
    fn id_operations_follow_the_record_after_shifts() {
        let mut store = TransactionStore::new();
        let salary = store.add(income("Salary", "1000")).unwrap();
        let rent = store.add(expense("Rent", "500")).unwrap();

        store.remove_by_id(salary.id).unwrap();
        let updated = store.update_by_id(rent.id, expense("Rent", "550")).unwrap();

        assert_eq!(store.position(rent.id), Some(0));
        assert_eq!(updated.amount, amount("550"));
        assert_eq!(store.get(rent.id), Some(&updated));
    }

    #[test]
    fn id_operations_fail_for_missing_ids() {
        let mut store = TransactionStore::new();

        assert_eq!(
            store.update_by_id(42, income("Salary", "1")),
            Err(Error::UpdateMissingTransaction)
        );
        assert_eq!(store.remove_by_id(42), Err(Error::DeleteMissingTransaction));
        assert_eq!(store.get(42), None);
    }
}
