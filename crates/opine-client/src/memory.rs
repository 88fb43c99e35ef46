use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use opine_types::{AccountRole, Address};

use crate::transport::{Confirmation, Transport, TransportResult};

/// One recorded call to [`Transport::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub payload: Vec<u8>,
    pub roles: Vec<AccountRole>,
}

/// In-memory, HashMap-based transport.
///
/// Intended for tests and embedding. Accounts are held behind a `RwLock`
/// and cloned on read. Submissions are recorded in order instead of being
/// executed; the stored accounts never change as a result of a submit, so
/// tests control exactly what each lookup sees.
pub struct MemoryTransport {
    accounts: RwLock<HashMap<Address, Vec<u8>>>,
    submissions: RwLock<Vec<Submission>>,
}

impl MemoryTransport {
    /// Create an empty transport with no accounts.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            submissions: RwLock::new(Vec::new()),
        }
    }

    /// Store raw bytes at `address`, replacing any previous value.
    pub fn set_account(&self, address: Address, bytes: Vec<u8>) {
        self.accounts
            .write()
            .expect("lock poisoned")
            .insert(address, bytes);
    }

    /// Remove the account at `address`. Returns `true` if it existed.
    pub fn remove_account(&self, address: &Address) -> bool {
        self.accounts
            .write()
            .expect("lock poisoned")
            .remove(address)
            .is_some()
    }

    /// Current bytes at `address`, if any.
    pub fn account(&self, address: &Address) -> Option<Vec<u8>> {
        self.accounts
            .read()
            .expect("lock poisoned")
            .get(address)
            .cloned()
    }

    /// All recorded submissions, oldest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.read().expect("lock poisoned").clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.read().expect("lock poisoned").len()
    }

    /// Drop all accounts and recorded submissions.
    pub fn clear(&self) {
        self.accounts.write().expect("lock poisoned").clear();
        self.submissions.write().expect("lock poisoned").clear();
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn fetch_account(&self, address: &Address) -> TransportResult<Option<Vec<u8>>> {
        let map = self.accounts.read().expect("lock poisoned");
        Ok(map.get(address).cloned())
    }

    async fn submit(
        &self,
        payload: &[u8],
        roles: &[AccountRole],
    ) -> TransportResult<Confirmation> {
        let mut log = self.submissions.write().expect("lock poisoned");
        log.push(Submission {
            payload: payload.to_vec(),
            roles: roles.to_vec(),
        });
        Ok(Confirmation(format!("memory-{}", log.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_stored_bytes() {
        let transport = MemoryTransport::new();
        let address = Address::new([1; 32]);
        transport.set_account(address, vec![1, 2, 3]);
        let bytes = transport.fetch_account(&address).await.unwrap();
        assert_eq!(bytes, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn fetch_missing_account_is_none() {
        let transport = MemoryTransport::new();
        let bytes = transport.fetch_account(&Address::new([9; 32])).await.unwrap();
        assert_eq!(bytes, None);
    }

    #[tokio::test]
    async fn removed_account_is_absent_again() {
        let transport = MemoryTransport::new();
        let address = Address::new([1; 32]);
        transport.set_account(address, vec![7]);
        assert!(transport.remove_account(&address));
        assert!(!transport.remove_account(&address));
        assert_eq!(transport.fetch_account(&address).await.unwrap(), None);
    }

    #[tokio::test]
    async fn submissions_are_recorded_in_order() {
        let transport = MemoryTransport::new();
        let role = AccountRole::writable_signer(Address::new([2; 32]));

        let first = transport.submit(&[0], &[role]).await.unwrap();
        let second = transport.submit(&[6], &[role]).await.unwrap();

        assert_ne!(first, second);
        let log = transport.submissions();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].payload, vec![0]);
        assert_eq!(log[1].payload, vec![6]);
    }

    #[tokio::test]
    async fn submit_does_not_touch_accounts() {
        let transport = MemoryTransport::new();
        let address = Address::new([3; 32]);
        transport.set_account(address, vec![1]);
        transport.submit(&[0], &[]).await.unwrap();
        assert_eq!(transport.account(&address), Some(vec![1]));
    }
}
