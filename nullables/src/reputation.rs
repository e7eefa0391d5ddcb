//! Nullable reputation source — programmed scores, recorded lookups.

use airgate_providers::{ProviderError, ReputationSource};
use airgate_types::{ReputationSignal, SocialHandle};
use std::future::Future;
use std::sync::Mutex;

/// A test reputation source that returns a programmed signal (or failure)
/// and records every handle it was asked about.
pub struct NullReputationSource {
    response: Mutex<Result<ReputationSignal, String>>,
    lookups: Mutex<Vec<String>>,
}

impl NullReputationSource {
    /// A source that answers every lookup with `signal`.
    pub fn returning(signal: ReputationSignal) -> Self {
        Self {
            response: Mutex::new(Ok(signal)),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// A source that answers like the provider does for unknown handles.
    pub fn unknown_handle() -> Self {
        Self::returning(ReputationSignal::zero())
    }

    /// A source that fails every lookup with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Mutex::new(Err(message.to_string())),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Change the programmed signal mid-test.
    pub fn set_signal(&self, signal: ReputationSignal) {
        *self.response.lock().unwrap() = Ok(signal);
    }

    /// All handles looked up so far (for assertions).
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl ReputationSource for NullReputationSource {
    fn lookup_reputation(
        &self,
        handle: &SocialHandle,
    ) -> impl Future<Output = Result<ReputationSignal, ProviderError>> + Send {
        self.lookups.lock().unwrap().push(handle.to_string());
        let result = self
            .response
            .lock()
            .unwrap()
            .clone()
            .map_err(ProviderError::RequestFailed);
        async move { result }
    }
}
