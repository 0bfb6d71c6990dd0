//! # KinGraph Home Feature
//!
//! The home screen's single behavior: trigger a fetch of the backend info
//! payload and expose its lifecycle as observable state.
//!
//! This crate showcases:
//! - A reducer-driven request lifecycle (idle / loading / success / failure)
//! - Single-flight triggering with latest-result-wins semantics
//! - Dependency injection of the HTTP client via an environment trait
//!
//! ## Switch-to-latest
//!
//! Every `Load` bumps a request sequence number and tags the fetch effect
//! with it. Completion actions carry the tag back; the reducer applies a
//! completion only when its tag equals the current sequence. A trigger
//! issued while an earlier fetch is still in flight therefore invalidates
//! the earlier fetch the moment it is sent - the stale completion arrives,
//! is compared, and mutates nothing.
//!
//! ## Example
//!
//! ```no_run
//! use kingraph_home::{HomeAction, HomeReducer, HomeState, ProductionHomeEnvironment};
//! use kingraph_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = ProductionHomeEnvironment::from_env();
//! let store = Store::new(HomeState::default(), HomeReducer::new(), env);
//!
//! store.send(HomeAction::Load).await?;
//! let loading = store.state(|s| s.loading).await;
//! assert!(loading);
//! # Ok(())
//! # }
//! ```

use kingraph_api::InfoResponse;
use kingraph_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

pub mod environment;
pub mod view;

pub use environment::{HomeEnvironment, ProductionHomeEnvironment};
pub use view::render;

/// Home screen state
///
/// Exactly one instance exists per store. The three observable projections
/// (`info`, `error`, `loading`) are what a rendering surface consumes;
/// `request_seq` is the cancellation token for in-flight fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Last successful info payload, kept across later failures
    pub info: Option<InfoResponse>,
    /// Message of the last failure, cleared on every new trigger
    pub error: Option<String>,
    /// True from the most recent trigger until its completion arrives
    pub loading: bool,
    /// Sequence number of the most recent trigger
    ///
    /// Only a completion tagged with this value may mutate state.
    pub request_seq: u64,
}

/// Home screen actions
///
/// `Load` is the user-facing trigger; the completion variants are produced
/// by fetch effects and carry the sequence number of the request that
/// spawned them.
#[derive(Debug, Clone)]
pub enum HomeAction {
    /// Trigger a (re)fetch of the info payload
    Load,
    /// A fetch resolved successfully
    LoadSucceeded {
        /// Sequence number the fetch was tagged with
        seq: u64,
        /// The payload the backend returned
        info: InfoResponse,
    },
    /// A fetch failed
    LoadFailed {
        /// Sequence number the fetch was tagged with
        seq: u64,
        /// Human-readable message derived from the failure
        message: String,
    },
}

/// Home screen reducer
///
/// Pure request-lifecycle logic. Generic over the environment type `E` so
/// production and scripted test environments use the same reducer.
#[derive(Debug, Clone, Copy)]
pub struct HomeReducer<E> {
    _phantom: std::marker::PhantomData<E>,
}

impl<E> HomeReducer<E> {
    /// Create a new home reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<E> Default for HomeReducer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HomeEnvironment> Reducer for HomeReducer<E> {
    type State = HomeState;
    type Action = HomeAction;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            HomeAction::Load => {
                // Bumping the sequence invalidates any in-flight fetch.
                state.request_seq += 1;
                state.loading = true;
                state.error = None;
                smallvec![environment.fetch_info(state.request_seq)]
            },
            HomeAction::LoadSucceeded { seq, info } => {
                if seq != state.request_seq {
                    // Superseded by a newer trigger
                    return smallvec![Effect::None];
                }
                state.loading = false;
                state.info = Some(info);
                smallvec![Effect::None]
            },
            HomeAction::LoadFailed { seq, message } => {
                if seq != state.request_seq {
                    // Superseded by a newer trigger
                    return smallvec![Effect::None];
                }
                state.loading = false;
                // A failure reports its message but does not discard a
                // previously fetched payload.
                state.error = Some(message);
                smallvec![Effect::None]
            },
        }
    }
}
