//! Nullable on-chain source — programmed signals, recorded lookups.

use airgate_providers::{OnchainSource, ProviderError};
use airgate_types::{OnchainSignal, WalletAddress};
use std::future::Future;
use std::sync::Mutex;

/// A test on-chain source that returns a programmed signal (or failure)
/// and records every address it was asked about.
pub struct NullOnchainSource {
    response: Mutex<Result<OnchainSignal, String>>,
    lookups: Mutex<Vec<String>>,
}

impl NullOnchainSource {
    /// A source that answers every lookup with `signal`.
    pub fn returning(signal: OnchainSignal) -> Self {
        Self {
            response: Mutex::new(Ok(signal)),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// A source that fails every lookup with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Mutex::new(Err(message.to_string())),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Change the programmed signal mid-test.
    pub fn set_signal(&self, signal: OnchainSignal) {
        *self.response.lock().unwrap() = Ok(signal);
    }

    /// All addresses looked up so far (for assertions).
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl OnchainSource for NullOnchainSource {
    fn lookup_onchain(
        &self,
        address: &WalletAddress,
    ) -> impl Future<Output = Result<OnchainSignal, ProviderError>> + Send {
        self.lookups.lock().unwrap().push(address.to_string());
        let result = self
            .response
            .lock()
            .unwrap()
            .clone()
            .map_err(ProviderError::RequestFailed);
        async move { result }
    }
}
