use serde::{Deserialize, Serialize};

/// Fields every API response carries next to its payload.
///
/// `success: false` with an `error` text is how the API reports rejected
/// requests, sometimes even with a 2xx status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    /// Error text from the body, ignoring blank strings.
    pub fn error_text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_reads_error_text() {
        let env: ApiEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "Product not found"}"#).unwrap();
        assert!(!env.success);
        assert_eq!(env.error_text(), Some("Product not found"));
    }

    #[test]
    fn test_envelope_defaults_to_failure() {
        let env: ApiEnvelope = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(!env.success);
        assert_eq!(env.error_text(), None);

        let blank: ApiEnvelope = serde_json::from_str(r#"{"error": "  "}"#).unwrap();
        assert_eq!(blank.error_text(), None);
    }
}
