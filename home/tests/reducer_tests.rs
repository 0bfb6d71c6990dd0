//! Integration tests for the home reducer.
//!
//! These live here (not in a `#[cfg(test)] mod` inside the crate) because they
//! depend on `kingraph-testing`, which itself depends on `kingraph-home`. As an
//! integration test both crates link the same single copy of `kingraph-home`,
//! avoiding the duplicate-crate type mismatch that an in-crate unit test hits.

use kingraph_core::reducer::Reducer;
use kingraph_home::{HomeAction, HomeReducer, HomeState};
    use kingraph_testing::home_mocks::{
        RecordingHomeEnvironment, ScriptedHomeEnvironment, sample_info,
    };
    use kingraph_testing::{ReducerTest, assertions};

    #[test]
    fn test_load_enters_loading_and_emits_fetch() {
        ReducerTest::new(HomeReducer::new())
            .with_env(ScriptedHomeEnvironment::new().with_success(sample_info()))
            .given_state(HomeState::default())
            .when_action(HomeAction::Load)
            .then_state(|state| {
                assert!(state.loading);
                assert_eq!(state.error, None);
                assert_eq!(state.request_seq, 1);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_load_clears_previous_error() {
        let state = HomeState {
            error: Some("boom".to_string()),
            ..HomeState::default()
        };

        ReducerTest::new(HomeReducer::new())
            .with_env(ScriptedHomeEnvironment::new().with_success(sample_info()))
            .given_state(state)
            .when_action(HomeAction::Load)
            .then_state(|state| {
                assert_eq!(state.error, None);
                assert!(state.loading);
            })
            .run();
    }

    #[test]
    fn test_each_load_requests_the_next_sequence() {
        let env = RecordingHomeEnvironment::default();
        let reducer = HomeReducer::new();
        let mut state = HomeState::default();

        let _ = reducer.reduce(&mut state, HomeAction::Load, &env);
        let _ = reducer.reduce(&mut state, HomeAction::Load, &env);
        let _ = reducer.reduce(&mut state, HomeAction::Load, &env);

        assert_eq!(env.requested(), vec![1, 2, 3]);
        assert_eq!(state.request_seq, 3);
    }

    #[test]
    fn test_current_success_is_applied() {
        let state = HomeState {
            loading: true,
            request_seq: 1,
            ..HomeState::default()
        };

        ReducerTest::new(HomeReducer::new())
            .with_env(RecordingHomeEnvironment::default())
            .given_state(state)
            .when_action(HomeAction::LoadSucceeded {
                seq: 1,
                info: sample_info(),
            })
            .then_state(|state| {
                assert!(!state.loading);
                assert_eq!(state.info, Some(sample_info()));
                assert_eq!(state.error, None);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn test_stale_success_is_ignored() {
        let state = HomeState {
            loading: true,
            request_seq: 2,
            ..HomeState::default()
        };

        ReducerTest::new(HomeReducer::new())
            .with_env(RecordingHomeEnvironment::default())
            .given_state(state)
            .when_action(HomeAction::LoadSucceeded {
                seq: 1,
                info: sample_info(),
            })
            .then_state(|state| {
                // Still waiting on request 2
                assert!(state.loading);
                assert_eq!(state.info, None);
            })
            .run();
    }

    #[test]
    fn test_current_failure_sets_error_and_keeps_info() {
        let state = HomeState {
            info: Some(sample_info()),
            loading: true,
            request_seq: 2,
            ..HomeState::default()
        };

        ReducerTest::new(HomeReducer::new())
            .with_env(RecordingHomeEnvironment::default())
            .given_state(state)
            .when_action(HomeAction::LoadFailed {
                seq: 2,
                message: "backend unreachable".to_string(),
            })
            .then_state(|state| {
                assert!(!state.loading);
                assert_eq!(state.error.as_deref(), Some("backend unreachable"));
                // Stale success survives a later failure
                assert_eq!(state.info, Some(sample_info()));
            })
            .run();
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let state = HomeState {
            loading: true,
            request_seq: 3,
            ..HomeState::default()
        };

        ReducerTest::new(HomeReducer::new())
            .with_env(RecordingHomeEnvironment::default())
            .given_state(state)
            .when_action(HomeAction::LoadFailed {
                seq: 2,
                message: "too late".to_string(),
            })
            .then_state(|state| {
                assert!(state.loading);
                assert_eq!(state.error, None);
            })
            .run();
    }

    #[test]
    fn test_failure_then_reload_clears_error() {
        let env = RecordingHomeEnvironment::default();
        let reducer = HomeReducer::new();
        let mut state = HomeState::default();

        let _ = reducer.reduce(&mut state, HomeAction::Load, &env);
        let _ = reducer.reduce(
            &mut state,
            HomeAction::LoadFailed {
                seq: 1,
                message: "boom".to_string(),
            },
            &env,
        );
        assert_eq!(state.error.as_deref(), Some("boom"));

        let _ = reducer.reduce(&mut state, HomeAction::Load, &env);
        assert_eq!(state.error, None);
        assert!(state.loading);
    }
