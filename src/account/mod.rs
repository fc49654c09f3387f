pub mod plan;

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AppError;

pub use plan::{PlanRules, PlanTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plan {
    Free,
    Pro,
    ProMax,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::ProMax => "pro_max",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub plan: Plan,
    pub credits: u32,
}

/// Persistent identity -> {plan, credits} state. The credit debit must be a
/// single conditional read-modify-write so concurrent requests cannot both
/// spend the last credit.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetch the account, creating it on first authenticated contact.
    async fn get_or_create(&self, id: &str) -> Account;

    /// Spend one credit if any remain; returns the new balance. Unmetered
    /// plans are never debited and return their balance unchanged.
    async fn debit(&self, id: &str) -> Result<u32, AppError>;

    /// Test and admin seam; accounts are never deleted in scope.
    async fn set_plan(&self, id: &str, plan: Plan, credits: u32);
}

pub struct InMemoryAccountStore {
    accounts: Mutex<HashMap<String, Account>>,
    starting_credits: u32,
}

impl InMemoryAccountStore {
    pub fn new(starting_credits: u32) -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            starting_credits,
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get_or_create(&self, id: &str) -> Account {
        let mut accounts = self.accounts.lock().unwrap();
        accounts
            .entry(id.to_string())
            .or_insert_with(|| Account {
                id: id.to_string(),
                plan: Plan::Free,
                credits: self.starting_credits,
            })
            .clone()
    }

    async fn debit(&self, id: &str) -> Result<u32, AppError> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(id)
            .ok_or(AppError::Unauthorized)?;

        if account.plan == Plan::ProMax {
            return Ok(account.credits);
        }

        // Check and decrement under one lock acquisition
        if account.credits == 0 {
            return Err(AppError::PlanViolation(
                "No credits remaining on this plan".into(),
            ));
        }
        account.credits -= 1;
        Ok(account.credits)
    }

    async fn set_plan(&self, id: &str, plan: Plan, credits: u32) {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts.entry(id.to_string()).or_insert_with(|| Account {
            id: id.to_string(),
            plan,
            credits,
        });
        account.plan = plan;
        account.credits = credits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn creates_account_on_first_contact() {
        let store = InMemoryAccountStore::new(10);
        let account = store.get_or_create("alice").await;
        assert_eq!(account.plan, Plan::Free);
        assert_eq!(account.credits, 10);
    }

    #[tokio::test]
    async fn debit_decrements_until_empty() {
        let store = InMemoryAccountStore::new(2);
        store.get_or_create("alice").await;

        assert_eq!(store.debit("alice").await.unwrap(), 1);
        assert_eq!(store.debit("alice").await.unwrap(), 0);
        assert!(store.debit("alice").await.is_err());
        assert_eq!(store.get_or_create("alice").await.credits, 0);
    }

    #[tokio::test]
    async fn debit_never_touches_unmetered_plans() {
        let store = InMemoryAccountStore::new(0);
        store.set_plan("boss", Plan::ProMax, 7).await;

        for _ in 0..5 {
            assert_eq!(store.debit("boss").await.unwrap(), 7);
        }
        assert_eq!(store.get_or_create("boss").await.credits, 7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_debits_spend_the_last_credit_exactly_once() {
        let store = Arc::new(InMemoryAccountStore::new(1));
        store.get_or_create("alice").await;

        let a = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.debit("alice").await }
        });
        let b = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.debit("alice").await }
        });

        let results = [a.await.unwrap(), b.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert_eq!(store.get_or_create("alice").await.credits, 0);
    }
}
