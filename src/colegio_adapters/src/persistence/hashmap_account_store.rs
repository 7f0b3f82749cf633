use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use colegio_core::{Account, AccountFilter, AccountId, AccountStore, Email, StoreError};

#[derive(Default)]
struct Accounts {
    by_id: HashMap<AccountId, Account>,
    last_id: i64,
}

#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .by_id
            .values()
            .find(|account| &account.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.by_id.get(&id).cloned())
    }

    async fn save(&self, mut account: Account) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;

        let email_taken = accounts
            .by_id
            .values()
            .any(|other| other.email == account.email && other.id != account.id);
        if email_taken {
            return Err(StoreError::Conflict);
        }

        let id = match account.id {
            Some(id) if accounts.by_id.contains_key(&id) => id,
            Some(_) => return Err(StoreError::NotFound),
            None => {
                accounts.last_id += 1;
                AccountId::new(accounts.last_id)
            }
        };

        account.id = Some(id);
        accounts.by_id.insert(id, account.clone());
        Ok(account)
    }

    async fn find_by_filter(&self, filter: AccountFilter) -> Result<Vec<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        let mut matching: Vec<Account> = accounts
            .by_id
            .values()
            .filter(|account| filter.matches(account))
            .cloned()
            .collect();
        matching.sort_by_key(|account| account.id);
        Ok(matching)
    }
}
