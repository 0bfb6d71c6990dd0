//! Scripted home environments
//!
//! Stand-ins for the HTTP client so home-feature tests run fast and
//! deterministically:
//! - [`ScriptedHomeEnvironment`]: queue of pre-scripted fetch outcomes
//! - [`GatedHomeEnvironment`]: fetches resolve only when the test says so
//! - [`RecordingHomeEnvironment`]: records requested sequences, never resolves

#![allow(clippy::missing_panics_doc)] // Test utilities document panics where critical

use kingraph_api::InfoResponse;
use kingraph_core::effect::Effect;
use kingraph_home::{HomeAction, HomeEnvironment};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;

/// Canonical payload used across tests
#[must_use]
pub fn sample_info() -> InfoResponse {
    InfoResponse {
        name: "kingraph".to_string(),
        version: "1.0.0".to_string(),
        env: Some("dev".to_string()),
    }
}

/// Outcome a scripted fetch resolves to
#[derive(Clone, Debug)]
pub enum ScriptedOutcome {
    /// The fetch succeeds with this payload
    Success(InfoResponse),
    /// The fetch fails with this user-facing message
    Failure(String),
}

impl ScriptedOutcome {
    fn into_action(self, seq: u64) -> HomeAction {
        match self {
            Self::Success(info) => HomeAction::LoadSucceeded { seq, info },
            Self::Failure(message) => HomeAction::LoadFailed { seq, message },
        }
    }
}

#[derive(Clone, Debug)]
struct ScriptedFetch {
    outcome: ScriptedOutcome,
    delay: Option<Duration>,
}

/// Environment that replays a queue of scripted fetch outcomes
///
/// Each `fetch_info` call consumes the next script entry. When the script is
/// exhausted, the fetch never completes - useful for asserting that the
/// loading flag stays up.
///
/// # Example
///
/// ```ignore
/// let env = ScriptedHomeEnvironment::new()
///     .with_success(sample_info())
///     .with_failure("backend unreachable");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedHomeEnvironment {
    script: Arc<Mutex<VecDeque<ScriptedFetch>>>,
}

impl ScriptedHomeEnvironment {
    /// Create an environment with an empty script
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a fetch that succeeds immediately
    #[must_use]
    pub fn with_success(self, info: InfoResponse) -> Self {
        self.push(ScriptedOutcome::Success(info), None);
        self
    }

    /// Script a fetch that fails immediately
    #[must_use]
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(ScriptedOutcome::Failure(message.into()), None);
        self
    }

    /// Script a fetch that succeeds after a delay
    #[must_use]
    pub fn with_delayed_success(self, info: InfoResponse, delay: Duration) -> Self {
        self.push(ScriptedOutcome::Success(info), Some(delay));
        self
    }

    /// Script a fetch that fails after a delay
    #[must_use]
    pub fn with_delayed_failure(self, message: impl Into<String>, delay: Duration) -> Self {
        self.push(ScriptedOutcome::Failure(message.into()), Some(delay));
        self
    }

    /// Number of scripted fetches not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn push(&self, outcome: ScriptedOutcome, delay: Option<Duration>) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(ScriptedFetch { outcome, delay });
    }
}

impl HomeEnvironment for ScriptedHomeEnvironment {
    fn fetch_info(&self, seq: u64) -> Effect<HomeAction> {
        let next = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(fetch) => Effect::future(async move {
                if let Some(delay) = fetch.delay {
                    tokio::time::sleep(delay).await;
                }
                Some(fetch.outcome.into_action(seq))
            }),
            // Script exhausted: this fetch never completes
            None => Effect::future(std::future::pending()),
        }
    }
}

/// Environment whose fetches resolve only when the test releases them
///
/// `fetch_info` parks each request behind a oneshot gate keyed by its
/// sequence number. Tests call [`resolve`](Self::resolve) to complete a
/// specific request, which makes interleavings ("the first fetch finishes
/// after the second") fully deterministic.
#[derive(Clone, Debug, Default)]
pub struct GatedHomeEnvironment {
    gates: Arc<Mutex<HashMap<u64, oneshot::Sender<ScriptedOutcome>>>>,
}

impl GatedHomeEnvironment {
    /// Create an environment with no parked fetches
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the parked fetch for `seq` with the given outcome
    ///
    /// Returns false when no fetch with that sequence is parked (it was
    /// never issued, or was already resolved).
    pub fn resolve(&self, seq: u64, outcome: ScriptedOutcome) -> bool {
        let gate = self
            .gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&seq);

        match gate {
            Some(tx) => tx.send(outcome).is_ok(),
            None => false,
        }
    }

    /// Sequence numbers of fetches currently parked
    #[must_use]
    pub fn pending(&self) -> Vec<u64> {
        let mut seqs: Vec<u64> = self
            .gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        seqs.sort_unstable();
        seqs
    }
}

impl HomeEnvironment for GatedHomeEnvironment {
    fn fetch_info(&self, seq: u64) -> Effect<HomeAction> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(seq, tx);

        Effect::future(async move {
            match rx.await {
                Ok(outcome) => Some(outcome.into_action(seq)),
                // Gate dropped without resolving: the request is abandoned
                Err(_) => None,
            }
        })
    }
}

/// Environment that records requested sequences and never resolves
///
/// For pure reducer tests that only care about what was asked of the
/// environment.
#[derive(Clone, Debug, Default)]
pub struct RecordingHomeEnvironment {
    requests: Arc<Mutex<Vec<u64>>>,
}

impl RecordingHomeEnvironment {
    /// Create an environment with no recorded requests
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence numbers passed to `fetch_info`, in call order
    #[must_use]
    pub fn requested(&self) -> Vec<u64> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HomeEnvironment for RecordingHomeEnvironment {
    fn fetch_info(&self, seq: u64) -> Effect<HomeAction> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(seq);
        Effect::future(std::future::pending())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_environment_consumes_in_order() {
        let env = ScriptedHomeEnvironment::new()
            .with_success(sample_info())
            .with_failure("boom");
        assert_eq!(env.remaining(), 2);

        let first = env.fetch_info(1);
        assert!(matches!(first, Effect::Future(_)));
        assert_eq!(env.remaining(), 1);
    }

    #[tokio::test]
    async fn test_scripted_success_resolves_with_tagged_action() {
        let env = ScriptedHomeEnvironment::new().with_success(sample_info());

        let Effect::Future(fut) = env.fetch_info(7) else {
            unreachable!("scripted fetch is always a future");
        };

        let action = fut.await;
        assert!(matches!(
            action,
            Some(HomeAction::LoadSucceeded { seq: 7, .. })
        ));
    }

    #[tokio::test]
    async fn test_gated_environment_resolves_on_demand() {
        let env = GatedHomeEnvironment::new();

        let Effect::Future(fut) = env.fetch_info(3) else {
            unreachable!("gated fetch is always a future");
        };
        assert_eq!(env.pending(), vec![3]);

        assert!(env.resolve(3, ScriptedOutcome::Failure("late".to_string())));
        let action = fut.await;
        assert!(matches!(action, Some(HomeAction::LoadFailed { seq: 3, .. })));
        assert_eq!(env.pending(), Vec::<u64>::new());
    }

    #[test]
    fn test_gated_environment_resolve_unknown_seq() {
        let env = GatedHomeEnvironment::new();
        assert!(!env.resolve(9, ScriptedOutcome::Failure("nobody home".to_string())));
    }

    #[test]
    fn test_recording_environment_tracks_sequences() {
        let env = RecordingHomeEnvironment::new();
        let _ = env.fetch_info(1);
        let _ = env.fetch_info(2);
        assert_eq!(env.requested(), vec![1, 2]);
    }
}
