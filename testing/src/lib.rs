//! # KinGraph Testing
//!
//! Testing utilities and helpers for the KinGraph reducer architecture.
//!
//! This crate provides:
//! - A fluent Given/When/Then harness for reducers
//! - Assertion helpers for effect lists
//! - Scripted home environments standing in for the HTTP client
//!
//! ## Example
//!
//! ```ignore
//! use kingraph_testing::home_mocks::{sample_info, ScriptedHomeEnvironment};
//! use kingraph_testing::ReducerTest;
//!
//! ReducerTest::new(HomeReducer::new())
//!     .with_env(ScriptedHomeEnvironment::new().with_success(sample_info()))
//!     .given_state(HomeState::default())
//!     .when_action(HomeAction::Load)
//!     .then_state(|state| assert!(state.loading))
//!     .run();
//! ```

/// Scripted environments for the home feature
pub mod home_mocks;


// Re-export commonly used items
pub use home_mocks::{
    GatedHomeEnvironment, RecordingHomeEnvironment, ScriptedHomeEnvironment, ScriptedOutcome,
    sample_info,
};
pub use reducer_test::{ReducerTest, assertions};
