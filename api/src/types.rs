//! Wire types for the KinGraph backend API

use serde::{Deserialize, Serialize};

/// Payload returned by `GET /api/v1/info`
///
/// A plain value: two instances are interchangeable when their fields are
/// equal, there is no identity beyond that.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InfoResponse {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Deployment environment, absent when the backend has none configured
    pub env: Option<String>,
}

/// Error body some endpoints return alongside a non-success status
///
/// The backend is not guaranteed to produce this shape; the `message` field
/// is used opportunistically when it parses.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_info_response_deserializes() {
        let json = r#"{"name":"kingraph","version":"1.0.0","env":"dev"}"#;
        let info: InfoResponse = serde_json::from_str(json).unwrap();

        assert_eq!(info.name, "kingraph");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.env.as_deref(), Some("dev"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_info_response_null_env() {
        let json = r#"{"name":"kingraph","version":"1.0.0","env":null}"#;
        let info: InfoResponse = serde_json::from_str(json).unwrap();

        assert_eq!(info.env, None);
    }

    #[test]
    fn test_info_response_value_equality() {
        let a = InfoResponse {
            name: "kingraph".into(),
            version: "1.0.0".into(),
            env: Some("dev".into()),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_info_response_rejects_wrong_field_types() {
        let json = r#"{"name":"kingraph","version":1,"env":null}"#;
        let result = serde_json::from_str::<InfoResponse>(json);
        assert!(result.is_err());
    }
}
