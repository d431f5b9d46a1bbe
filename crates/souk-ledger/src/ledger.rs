use souk_types::{Item, Transaction};

/// The append-only trade history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradeLedger {
    transactions: Vec<Transaction>,
}

impl TradeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from restored transactions, preserving order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Consume the ledger, yielding the transactions in order.
    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }

    /// Append a completed trade. `item` is the post-purchase snapshot of the
    /// item, not a live reference into the inventory.
    pub fn record(&mut self, buyer: &str, item: Item, quantity: u32) -> Transaction {
        let transaction = Transaction::new(buyer, item, quantity);
        self.transactions.push(transaction.clone());
        transaction
    }

    /// All transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transactions recorded for one buyer, oldest first.
    pub fn for_buyer(&self, username: &str) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.buyer == username)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
