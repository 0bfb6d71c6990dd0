//! Text rendering surface for the home state
//!
//! Consumes the three observable projections and nothing else. The runtime
//! stays out of this module: callers read state from the store and hand it
//! over.

use crate::HomeState;

/// Render the home state as plain text
///
/// - a `loading...` line while a fetch is in flight
/// - the info payload, pretty-printed, when one has been fetched
/// - the error line, when the last fetch failed
/// - the empty string when idle with nothing to show
#[must_use]
pub fn render(state: &HomeState) -> String {
    let mut out = String::new();

    if state.loading {
        out.push_str("loading...\n");
    }

    if let Some(info) = &state.info {
        // Serializing a plain struct of strings cannot fail; fall back to
        // the Debug form rather than unwrapping.
        match serde_json::to_string_pretty(info) {
            Ok(json) => out.push_str(&json),
            Err(_) => out.push_str(&format!("{info:?}")),
        }
        out.push('\n');
    }

    if let Some(error) = &state.error {
        out.push_str(error);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingraph_api::InfoResponse;

    #[test]
    fn test_idle_state_renders_nothing() {
        let state = HomeState::default();
        assert_eq!(render(&state), "");
    }

    #[test]
    fn test_loading_state_renders_indicator() {
        let state = HomeState {
            loading: true,
            ..HomeState::default()
        };
        assert_eq!(render(&state), "loading...\n");
    }

    #[test]
    fn test_success_renders_payload_json() {
        let state = HomeState {
            info: Some(InfoResponse {
                name: "kingraph".to_string(),
                version: "1.0.0".to_string(),
                env: None,
            }),
            ..HomeState::default()
        };

        let rendered = render(&state);
        assert!(rendered.contains("\"name\": \"kingraph\""));
        assert!(rendered.contains("\"version\": \"1.0.0\""));
        assert!(rendered.contains("\"env\": null"));
    }

    #[test]
    fn test_failure_renders_error_line() {
        let state = HomeState {
            error: Some("backend unreachable".to_string()),
            ..HomeState::default()
        };
        assert_eq!(render(&state), "backend unreachable\n");
    }

    #[test]
    fn test_stale_payload_and_error_render_together() {
        let state = HomeState {
            info: Some(InfoResponse {
                name: "kingraph".to_string(),
                version: "1.0.0".to_string(),
                env: Some("dev".to_string()),
            }),
            error: Some("backend unreachable".to_string()),
            ..HomeState::default()
        };

        let rendered = render(&state);
        assert!(rendered.contains("\"name\": \"kingraph\""));
        assert!(rendered.ends_with("backend unreachable\n"));
    }
}
