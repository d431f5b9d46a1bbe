use serde::{Deserialize, Serialize};
use souk_types::{Account, Item, Transaction};

/// Everything the market persists, in one serializable unit.
///
/// Collection order is preserved through a save/load cycle; positional
/// operations (account approval by index) depend on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotData {
    pub accounts: Vec<Account>,
    pub items: Vec<Item>,
    pub transactions: Vec<Transaction>,
}

impl SnapshotData {
    /// Render the operator-facing text export.
    ///
    /// One section per collection, one `Display` line per record, sections
    /// separated by a blank line. Write-only output; nothing parses it back.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Accounts:\n");
        for account in &self.accounts {
            out.push_str(&account.to_string());
            out.push('\n');
        }
        out.push_str("\nItems:\n");
        for item in &self.items {
            out.push_str(&item.to_string());
            out.push('\n');
        }
        out.push_str("\nTransactions:\n");
        for transaction in &self.transactions {
            out.push_str(&transaction.to_string());
            out.push('\n');
        }
        out
    }
}
