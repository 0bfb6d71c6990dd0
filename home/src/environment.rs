//! Environments for the home feature
//!
//! The environment is the dependency-injection seam: the reducer asks it for
//! a fetch effect and never touches the HTTP client directly. Production
//! wraps [`InfoClient`]; tests substitute scripted implementations.

use crate::HomeAction;
use kingraph_api::InfoClient;
use kingraph_core::effect::Effect;
use std::sync::Arc;

/// Dependencies of the home feature
pub trait HomeEnvironment: Send + Sync {
    /// Build the effect that fetches the info payload
    ///
    /// The effect must resolve into exactly one completion action tagged
    /// with `seq` - `LoadSucceeded` or `LoadFailed`, never an escaping
    /// error. `seq` is the request sequence the reducer assigned to this
    /// fetch; the reducer uses it to discard superseded completions.
    fn fetch_info(&self, seq: u64) -> Effect<HomeAction>;
}

/// Production environment backed by the real backend client
#[derive(Clone, Debug)]
pub struct ProductionHomeEnvironment {
    client: Arc<InfoClient>,
}

impl ProductionHomeEnvironment {
    /// Create an environment around an existing client
    #[must_use]
    pub fn new(client: InfoClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Create an environment with the client configured from the environment
    ///
    /// Base URL from `KINGRAPH_API_URL`, defaulting to the local backend.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(InfoClient::from_env())
    }
}

impl HomeEnvironment for ProductionHomeEnvironment {
    fn fetch_info(&self, seq: u64) -> Effect<HomeAction> {
        let client = Arc::clone(&self.client);

        Effect::future(async move {
            tracing::debug!(seq, "Fetching info");

            // The client logs failures; here they only become actions. This
            // is the boundary where an error must always resolve into the
            // failure state rather than escaping.
            Some(match client.info().await {
                Ok(info) => HomeAction::LoadSucceeded { seq, info },
                Err(error) => HomeAction::LoadFailed {
                    seq,
                    message: error.user_message(),
                },
            })
        })
    }
}
