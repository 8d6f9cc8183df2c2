//! Response bodies.

use serde::{Deserialize, Serialize};

/// Body of every `/send` response and of every failed sender API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResponse {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_error() {
        let json = serde_json::to_string(&SendResponse::success()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn failure_carries_reason() {
        let json = serde_json::to_value(SendResponse::failure("No player configured")).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "No player configured");
    }
}
