//! REST client for the Baynana user authentication API.
//!
//! Covers the phone-OTP endpoints used by the login, signup and
//! free-listing flows. Callers pass the endpoint path so one client serves
//! every flow variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use baynana_api::{paths, BaynanaClient};
//!
//! let client = BaynanaClient::new("https://api.baynana.example")?;
//! let sent = client.send_otp(paths::LOGIN_SEND_OTP, "9876543210").await?;
//! assert!(sent.success);
//! ```

pub mod error;
pub mod types;

pub use error::{ApiError, Result};
pub use types::{
    RegisterRequest, RegisterResponse, SendOtpRequest, SendOtpResponse, UserPayload,
    VerifyOtpRequest, VerifyOtpResponse,
};

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::types::ErrorBody;

/// Endpoint paths, relative to the configured base URL.
pub mod paths {
    pub const SEND_OTP: &str = "/api/user/send-otp";
    pub const VERIFY_OTP: &str = "/api/user/verify-otp";
    pub const REGISTER: &str = "/api/user/register";
    pub const LOGIN_SEND_OTP: &str = "/api/user/login/send-otp";
    pub const LOGIN_VERIFY_OTP: &str = "/api/user/login/verify-otp";
    pub const SIGNUP_SEND_OTP: &str = "/api/user/signup/send-otp";
}

#[derive(Debug, Clone)]
pub struct BaynanaClient {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl BaynanaClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url.as_ref())?,
            auth_token: None,
        })
    }

    /// Use a preconfigured reqwest client (timeouts, proxies).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    pub async fn send_otp(&self, path: &str, phone_number: &str) -> Result<SendOtpResponse> {
        self.post_json(path, &SendOtpRequest { phone_number }).await
    }

    pub async fn verify_otp(
        &self,
        path: &str,
        phone_number: &str,
        otp: &str,
    ) -> Result<VerifyOtpResponse> {
        self.post_json(path, &VerifyOtpRequest { phone_number, otp })
            .await
    }

    pub async fn register(
        &self,
        path: &str,
        phone_number: &str,
        name: &str,
    ) -> Result<RegisterResponse> {
        self.post_json(path, &RegisterRequest { phone_number, name })
            .await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");

        let mut req = self.client.post(url).json(body);
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.message);
            tracing::debug!(status = status.as_u16(), ?message, "Request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_on_bare_host() {
        let client = BaynanaClient::new("https://api.example.com").unwrap();
        assert_eq!(
            client.endpoint(paths::LOGIN_SEND_OTP).unwrap().as_str(),
            "https://api.example.com/api/user/login/send-otp"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = BaynanaClient::new("https://example.com/backend").unwrap();
        assert_eq!(
            client.endpoint(paths::REGISTER).unwrap().as_str(),
            "https://example.com/backend/api/user/register"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            BaynanaClient::new("not a url"),
            Err(ApiError::Url(_))
        ));
    }
}
