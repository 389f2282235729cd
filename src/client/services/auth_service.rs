use crate::client::models::credentials::Credentials;
use crate::client::services::api_client::ApiClient;
use crate::common::error::ApiError;
use crate::common::models::SignupRequest;
use log::{error, info};

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const SIGNUP_SUCCESS: &str = "Signup successful";
pub const SIGNUP_FAILED: &str = "Signup failed";

/// Result of a credential submission, shown to the user as `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
}

pub struct AuthService;

impl AuthService {
    pub async fn login(api: &ApiClient, credentials: &Credentials) -> AuthResult {
        match api.authenticate(&credentials.username, &credentials.password).await {
            Ok(token) => {
                info!("[AUTH] Logged in as {}", credentials.username);
                AuthResult { success: true, message: LOGIN_SUCCESS.to_string(), token: token.map(|t| t.access_token) }
            }
            Err(e) => {
                error!("Login error: {}", e);
                AuthResult { success: false, message: Self::login_failure_message(&e), token: None }
            }
        }
    }

    pub async fn signup(api: &ApiClient, request: &SignupRequest) -> AuthResult {
        match api.register(request).await {
            Ok(()) => {
                info!("[AUTH] Registered {}", request.username);
                AuthResult { success: true, message: SIGNUP_SUCCESS.to_string(), token: None }
            }
            Err(e) => {
                error!("There was an error signing up: {}", e);
                AuthResult { success: false, message: SIGNUP_FAILED.to_string(), token: None }
            }
        }
    }

    /// `Login failed: <detail>`, preferring the server's detail over the error text.
    pub fn login_failure_message(err: &ApiError) -> String {
        if let ApiError::Status { status, .. } = err {
            // a 2xx other than 200 is still a failed login; any body detail is ignored
            if (200..300).contains(status) {
                return "Login failed".to_string();
            }
        }
        let reason = match err.detail() {
            Some(detail) => detail.to_string(),
            None => err.to_string(),
        };
        let reason = if reason.trim().is_empty() { "Unknown error".to_string() } else { reason };
        format!("Login failed: {}", reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_prefers_server_detail() {
        let err = ApiError::Status { status: 401, detail: Some("Incorrect username or password".into()) };
        assert_eq!(AuthService::login_failure_message(&err), "Login failed: Incorrect username or password");
    }

    #[test]
    fn failure_message_falls_back_to_error_text() {
        let err = ApiError::Status { status: 500, detail: None };
        assert_eq!(AuthService::login_failure_message(&err), "Login failed: Request failed with status code 500");
        let err = ApiError::Decode(String::new());
        assert_eq!(AuthService::login_failure_message(&err), "Login failed: Unexpected response body: ");
    }

    #[test]
    fn non_200_success_status_is_plain_failure() {
        let err = ApiError::Status { status: 204, detail: None };
        assert_eq!(AuthService::login_failure_message(&err), "Login failed");
        let err = ApiError::Status { status: 201, detail: Some("created".into()) };
        assert_eq!(AuthService::login_failure_message(&err), "Login failed");
    }
}
