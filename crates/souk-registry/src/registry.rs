use souk_types::{Account, Role};

use crate::error::{RegistryError, RegistryResult};

/// The ordered account collection.
///
/// Accounts are addressed by live position: deleting an account shifts every
/// later account down by one, and a subsequent approve/delete with an old
/// index lands on whatever occupies that position now. Usernames are not
/// required to be unique; credential lookup returns the first match in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from restored accounts, preserving order.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Consume the registry, yielding the accounts in order.
    pub fn into_accounts(self) -> Vec<Account> {
        self.accounts
    }

    /// All accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// True if any admin-role account carries the given username.
    ///
    /// Keyed on role and username together: usernames are not unique, so a
    /// buyer registered under the admin's username must not satisfy the
    /// bootstrap check.
    pub fn contains_admin(&self, username: &str) -> bool {
        self.accounts
            .iter()
            .any(|a| a.role == Role::Admin && a.username == username)
    }

    /// Register a new, unapproved account.
    ///
    /// Only `owner` and `buyer` are accepted: unknown role tokens and
    /// `admin` (which is seeded at startup, never self-registered) are both
    /// rejected. Duplicate usernames are allowed.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        role: &str,
    ) -> RegistryResult<Account> {
        let parsed = role.parse::<Role>().map_err(|_| RegistryError::InvalidRole {
            role: role.to_string(),
        })?;
        if parsed == Role::Admin {
            return Err(RegistryError::InvalidRole {
                role: role.to_string(),
            });
        }

        let account = Account::new(username, password, parsed);
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Look up an account by exact credential match.
    ///
    /// Returns the first match in insertion order. The approval flag is NOT
    /// consulted here: an unapproved account with correct credentials is
    /// returned as-is, and gating on approval is the login layer's job.
    pub fn authenticate(&self, username: &str, password: &str) -> RegistryResult<Account> {
        self.accounts
            .iter()
            .find(|a| a.credentials_match(username, password))
            .cloned()
            .ok_or(RegistryError::BadCredentials)
    }

    /// Mark the account at the given live position as approved.
    pub fn approve(&mut self, index: usize) -> RegistryResult<()> {
        let len = self.accounts.len();
        let account = self
            .accounts
            .get_mut(index)
            .ok_or(RegistryError::IndexOutOfRange { index, len })?;
        account.approved = true;
        Ok(())
    }

    /// Remove the account at the given live position, preserving the
    /// relative order of the rest.
    pub fn delete(&mut self, index: usize) -> RegistryResult<()> {
        if index >= self.accounts.len() {
            return Err(RegistryError::IndexOutOfRange {
                index,
                len: self.accounts.len(),
            });
        }
        self.accounts.remove(index);
        Ok(())
    }

    /// Insert an account at the front of the collection.
    ///
    /// Bypasses the registration rules; used by the bootstrap path to seed
    /// the pre-approved admin.
    pub fn insert_front(&mut self, account: Account) {
        self.accounts.insert(0, account);
    }
}
