//! Nullable claim gateway — records submissions instead of relaying them.

use airgate_claim::{ClaimError, ClaimGateway, ClaimReceipt};
use airgate_types::{SocialHandle, WalletAddress};
use std::collections::HashSet;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A test claim gateway backed by an in-memory claimed set.
///
/// Successful submissions mark the address as claimed, so a second claim
/// for the same address fails the way the contract would.
pub struct NullClaimGateway {
    claimed: Mutex<HashSet<String>>,
    submissions: Mutex<Vec<(String, String)>>,
    status_checks: AtomicUsize,
    fail_message: Option<String>,
}

impl NullClaimGateway {
    pub fn new() -> Self {
        Self {
            claimed: Mutex::new(HashSet::new()),
            submissions: Mutex::new(Vec::new()),
            status_checks: AtomicUsize::new(0),
            fail_message: None,
        }
    }

    /// A gateway that fails every call with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_message: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Pre-mark an address as already claimed.
    pub fn mark_claimed(&self, address: &str) {
        self.claimed.lock().unwrap().insert(address.to_string());
    }

    /// All (address, handle) pairs submitted so far (for assertions).
    pub fn submissions(&self) -> Vec<(String, String)> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    /// How many times the claimed-status was checked.
    pub fn status_check_count(&self) -> usize {
        self.status_checks.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), ClaimError> {
        match &self.fail_message {
            Some(message) => Err(ClaimError::Unreachable(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for NullClaimGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimGateway for NullClaimGateway {
    fn has_claimed(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<bool, ClaimError>> + Send {
        self.status_checks.fetch_add(1, Ordering::SeqCst);
        let result = self
            .check_failure()
            .map(|()| self.claimed.lock().unwrap().contains(address.as_str()));
        async move { result }
    }

    fn submit_claim(
        &self,
        address: &WalletAddress,
        handle: &SocialHandle,
    ) -> impl Future<Output = Result<ClaimReceipt, ClaimError>> + Send {
        let result = self.check_failure().and_then(|()| {
            let mut claimed = self.claimed.lock().unwrap();
            if !claimed.insert(address.as_str().to_string()) {
                return Err(ClaimError::AlreadyClaimed(address.clone()));
            }
            let mut submissions = self.submissions.lock().unwrap();
            submissions.push((address.as_str().to_string(), handle.as_str().to_string()));
            // Deterministic, well-formed transaction hash per submission.
            let transaction_hash = format!("{:#066x}", submissions.len());
            Ok(ClaimReceipt {
                address: address.clone(),
                handle: handle.clone(),
                transaction_hash,
            })
        });
        async move { result }
    }
}
