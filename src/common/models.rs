use serde::{Deserialize, Serialize};

/// Body of `/generate-images/` and `/remove-background/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub text_prompts: Vec<String>,
}

/// Response of both image endpoints: base64-encoded PNGs, one per prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<String>,
}

/// Body of `/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response of `/token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Error body returned by the backend, e.g. `{"detail": "Incorrect username or password"}`.
/// Validation errors carry a list instead of a string, so `detail` stays untyped.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_uses_backend_field_name() {
        let req = GenerationRequest { text_prompts: vec!["cat".into(), "".into()] };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "text_prompts": ["cat", ""] }));
    }

    #[test]
    fn error_body_only_exposes_string_detail() {
        let plain: ErrorBody = serde_json::from_str(r#"{"detail":"Incorrect username or password"}"#).unwrap();
        assert_eq!(plain.detail_text().as_deref(), Some("Incorrect username or password"));

        let listed: ErrorBody = serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        assert_eq!(listed.detail_text(), None);
    }
}
