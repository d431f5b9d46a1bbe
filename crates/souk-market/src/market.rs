use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use souk_catalog::SortKey;
use souk_inventory::Inventory;
use souk_ledger::TradeLedger;
use souk_registry::AccountRegistry;
use souk_snapshot::{SnapshotData, SnapshotStore};
use souk_types::{Account, Item, Role, Transaction};

use crate::config::MarketConfig;
use crate::error::{MarketError, MarketResult};

/// The three stores, only ever touched together under the market lock.
struct MarketState {
    registry: AccountRegistry,
    inventory: Inventory,
    ledger: TradeLedger,
}

impl MarketState {
    fn empty() -> Self {
        Self {
            registry: AccountRegistry::new(),
            inventory: Inventory::new(),
            ledger: TradeLedger::new(),
        }
    }

    fn from_snapshot(data: SnapshotData) -> Self {
        Self {
            registry: AccountRegistry::from_accounts(data.accounts),
            inventory: Inventory::from_items(data.items),
            ledger: TradeLedger::from_transactions(data.transactions),
        }
    }

    fn to_snapshot(&self) -> SnapshotData {
        SnapshotData {
            accounts: self.registry.accounts().to_vec(),
            items: self.inventory.items().to_vec(),
            transactions: self.ledger.transactions().to_vec(),
        }
    }
}

/// The market facade: registry, inventory, and ledger behind one lock.
///
/// Construct once with [`Market::open`] and share by handle (`Arc<Market>`).
/// Every operation acquires the single state lock exactly once, so compound
/// operations like [`Market::purchase`] are atomic with respect to every
/// other caller.
pub struct Market {
    config: MarketConfig,
    snapshot: SnapshotStore,
    state: Mutex<MarketState>,
}

impl Market {
    /// Open the market: restore the snapshot and seed the bootstrap admin.
    ///
    /// A missing snapshot is a fresh start. An unreadable or corrupt one is
    /// logged and degraded to a fresh start rather than refusing to serve —
    /// the snapshot is a convenience, not a ledger of record. Either way,
    /// if no admin-role account under the configured admin username
    /// survives the restore, a pre-approved admin is inserted at position 0
    /// and the state is persisted immediately, so the snapshot on disk
    /// always contains the admin. A non-admin account that merely shares
    /// the username does not count: it can never serve the admin duties,
    /// so it must not suppress the re-seed.
    pub fn open(config: MarketConfig) -> MarketResult<Self> {
        let snapshot = SnapshotStore::new(&config.snapshot_path, &config.export_path);

        let mut state = match snapshot.load() {
            Ok(Some(data)) => {
                info!(
                    accounts = data.accounts.len(),
                    items = data.items.len(),
                    transactions = data.transactions.len(),
                    "market state restored"
                );
                MarketState::from_snapshot(data)
            }
            Ok(None) => {
                info!("no snapshot on disk; starting empty");
                MarketState::empty()
            }
            Err(e) => {
                warn!(error = %e, "snapshot unreadable; starting empty");
                MarketState::empty()
            }
        };

        if !state.registry.contains_admin(&config.admin_username) {
            let mut admin = Account::new(
                config.admin_username.clone(),
                config.admin_password.clone(),
                Role::Admin,
            );
            admin.approved = true;
            state.registry.insert_front(admin);
            snapshot.save(&state.to_snapshot())?;
            info!(username = %config.admin_username, "bootstrap admin seeded");
        }

        Ok(Self {
            config,
            snapshot,
            state: Mutex::new(state),
        })
    }

    /// The configuration this market was opened with.
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    // ---- Account operations ----

    /// Register a new, unapproved account. `role` is the raw role token;
    /// `admin` and unknown tokens are rejected.
    pub fn register(&self, username: &str, password: &str, role: &str) -> MarketResult<Account> {
        let mut state = self.lock()?;
        let account = state.registry.register(username, password, role)?;
        self.persist(&state);
        Ok(account)
    }

    /// Credential check only. Returns the matching account whether or not
    /// it has been approved; use [`Market::login`] for the approval gate.
    pub fn authenticate(&self, username: &str, password: &str) -> MarketResult<Account> {
        let state = self.lock()?;
        Ok(state.registry.authenticate(username, password)?)
    }

    /// Two-stage login: credential check first, approval gate second.
    ///
    /// An unapproved account with correct credentials is `NotApproved`, not
    /// `BadCredentials` — the caller learns the account exists but is still
    /// waiting on an admin.
    pub fn login(&self, username: &str, password: &str) -> MarketResult<Account> {
        let state = self.lock()?;
        let account = state.registry.authenticate(username, password)?;
        if !account.approved {
            return Err(MarketError::NotApproved {
                username: account.username,
            });
        }
        Ok(account)
    }

    /// Approve the account at `index` (current registry position).
    pub fn approve_account(&self, index: usize) -> MarketResult<()> {
        let mut state = self.lock()?;
        state.registry.approve(index)?;
        self.persist(&state);
        Ok(())
    }

    /// Delete the account at `index` (current registry position). Later
    /// accounts shift down by one.
    pub fn delete_account(&self, index: usize) -> MarketResult<()> {
        let mut state = self.lock()?;
        state.registry.delete(index)?;
        self.persist(&state);
        Ok(())
    }

    /// All accounts in registry order.
    pub fn accounts(&self) -> MarketResult<Vec<Account>> {
        Ok(self.lock()?.registry.accounts().to_vec())
    }

    // ---- Inventory operations ----

    /// List a new item. Duplicate names are allowed; name-keyed operations
    /// hit the earliest listing first.
    pub fn add_item(&self, name: &str, price: u64, quantity: u32) -> MarketResult<Item> {
        let mut state = self.lock()?;
        let item = state.inventory.add(name, price, quantity);
        self.persist(&state);
        Ok(item)
    }

    /// Replace every field of the first item named `old_name`. Editing the
    /// quantity to zero keeps the item listed.
    pub fn edit_item(
        &self,
        old_name: &str,
        new_name: &str,
        price: u64,
        quantity: u32,
    ) -> MarketResult<()> {
        let mut state = self.lock()?;
        state.inventory.edit(old_name, new_name, price, quantity)?;
        self.persist(&state);
        Ok(())
    }

    /// Remove the first item with the given name.
    pub fn delete_item(&self, name: &str) -> MarketResult<()> {
        let mut state = self.lock()?;
        state.inventory.remove(name)?;
        self.persist(&state);
        Ok(())
    }

    /// All items in listing order.
    pub fn items(&self) -> MarketResult<Vec<Item>> {
        Ok(self.lock()?.inventory.items().to_vec())
    }

    /// Catalog view: filter by a case-insensitive name substring, then order
    /// by `sort_key`. Runs against a consistent snapshot of the inventory
    /// and never disturbs the listing order other callers see.
    pub fn browse(&self, search_term: &str, sort_key: SortKey) -> MarketResult<Vec<Item>> {
        let state = self.lock()?;
        Ok(souk_catalog::query(
            state.inventory.items(),
            search_term,
            sort_key,
        ))
    }

    // ---- Trading operations ----

    /// Buy `quantity` units of the first item named `item_name`.
    ///
    /// One logical operation under one lock acquisition: decrement the
    /// stock (removing the item when it hits zero), append the transaction,
    /// persist. On any inventory error nothing is recorded and nothing is
    /// saved. `buyer` is recorded as given; the login gate upstream decides
    /// who may trade.
    pub fn purchase(
        &self,
        buyer: &str,
        item_name: &str,
        quantity: u32,
    ) -> MarketResult<Transaction> {
        let mut state = self.lock()?;
        let bought = state.inventory.purchase(item_name, quantity)?;
        let transaction = state.ledger.record(buyer, bought, quantity);
        self.persist(&state);
        Ok(transaction)
    }

    /// All transactions, oldest first.
    pub fn transactions(&self) -> MarketResult<Vec<Transaction>> {
        Ok(self.lock()?.ledger.transactions().to_vec())
    }

    /// The transactions recorded for one buyer, oldest first.
    pub fn transactions_for_buyer(&self, username: &str) -> MarketResult<Vec<Transaction>> {
        Ok(self.lock()?.ledger.for_buyer(username))
    }

    // ---- Internals ----

    fn lock(&self) -> MarketResult<MutexGuard<'_, MarketState>> {
        self.state
            .lock()
            .map_err(|_| MarketError::Internal("market state lock poisoned".into()))
    }

    /// Write-through save. Failure is logged and swallowed: the in-memory
    /// state is authoritative for the life of the process.
    fn persist(&self, state: &MarketState) {
        if let Err(e) = self.snapshot.save(&state.to_snapshot()) {
            warn!(error = %e, "snapshot save failed; in-memory state stands");
        }
    }
}
