//! Account Service Client
//!
//! HTTP client for the two owner-account endpoints of the remote
//! CoreQuarry service. Each operation performs exactly one request,
//! never retries, and maps the outcome into [`AuthError`].
//!
//! Response contract: a successful login carries a `token` field; error
//! statuses carry an optional `message` field which is surfaced to the
//! user verbatim when present.

use serde::{Deserialize, Serialize};

use crate::auth::error::{AuthError, GENERIC_REMOTE_MESSAGE};

/// Endpoint path for owner login
const LOGIN_PATH: &str = "/api/owner/account/login";

/// Endpoint path for owner registration
const REGISTER_PATH: &str = "/api/owner/account/register";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    // The remote service expects the Indonesian field name.
    #[serde(rename = "nama")]
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the remote owner-account service.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its
/// connection pool across clones.
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    login_url: String,
    register_url: String,
}

impl AccountClient {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            http: reqwest::Client::new(),
            login_url: format!("{base}{LOGIN_PATH}"),
            register_url: format!("{base}{REGISTER_PATH}"),
        }
    }

    /// Log in with an email and password, returning the session token.
    ///
    /// The caller validates that both fields are non-empty before
    /// invoking this; the client trusts its input.
    ///
    /// # Errors
    ///
    /// - `Network` if the request never reached the service
    /// - `RemoteRejected` for any non-2xx status
    /// - `Protocol` if a 2xx response carries no usable token
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let response = self
            .http
            .post(&self.login_url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "login request failed to reach the server");
                AuthError::network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::rejection("login", response).await);
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::protocol(format!("malformed login response: {e}")))?;

        match body.token {
            Some(token) if !token.is_empty() => {
                tracing::info!("login accepted");
                Ok(token)
            }
            _ => {
                tracing::warn!("login response carried no token");
                Err(AuthError::protocol("login response is missing the token field"))
            }
        }
    }

    /// Register a new owner account.
    ///
    /// Success produces no token; the caller sends the user back to the
    /// login screen.
    ///
    /// # Errors
    ///
    /// - `Network` if the request never reached the service
    /// - `RemoteRejected` for any non-2xx status
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let response = self
            .http
            .post(&self.register_url)
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "register request failed to reach the server");
                AuthError::network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::rejection("register", response).await);
        }

        tracing::info!("registration accepted");
        Ok(())
    }

    /// Map a non-2xx response into `RemoteRejected`, preferring the
    /// service's own `message` over the generic fallback.
    async fn rejection(operation: &str, response: reqwest::Response) -> AuthError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| GENERIC_REMOTE_MESSAGE.to_string());
        tracing::warn!(%status, operation, "request rejected by the server");
        AuthError::remote_rejected(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_urls() {
        let client = AccountClient::new("https://example.com");
        assert_eq!(client.login_url, "https://example.com/api/owner/account/login");
        assert_eq!(
            client.register_url,
            "https://example.com/api/owner/account/register"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = AccountClient::new("https://example.com/");
        assert_eq!(client.login_url, "https://example.com/api/owner/account/login");
    }

    #[test]
    fn test_register_body_uses_remote_field_name() {
        let body = serde_json::to_value(RegisterRequest {
            name: "Alif Arya",
            email: "alif@example.com",
            password: "secret",
        })
        .unwrap();
        assert_eq!(body["nama"], "Alif Arya");
        assert!(body.get("name").is_none());
    }

    #[test]
    fn test_token_response_tolerates_extra_fields() {
        let body: TokenResponse =
            serde_json::from_str(r#"{"token":"abc123","owner":{"id":1}}"#).unwrap();
        assert_eq!(body.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_token_response_without_token() {
        let body: TokenResponse = serde_json::from_str(r#"{"owner":{"id":1}}"#).unwrap();
        assert!(body.token.is_none());
    }
}
