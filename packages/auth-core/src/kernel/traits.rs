// Trait definitions for dependency injection
//
// INFRASTRUCTURE only: raw endpoint calls. Deciding what a reply means
// (known user, new user, rejection) belongs to the wizard.

use std::sync::Arc;

use async_trait::async_trait;
use baynana_api::{ApiError, RegisterResponse, SendOtpResponse, VerifyOtpResponse};

#[async_trait]
pub trait BaseAuthApi: Send + Sync {
    /// Ask the backend to text a code to `phone_number`
    async fn send_otp(&self, path: &str, phone_number: &str)
        -> Result<SendOtpResponse, ApiError>;

    /// Check a code for `phone_number`
    async fn verify_otp(
        &self,
        path: &str,
        phone_number: &str,
        otp: &str,
    ) -> Result<VerifyOtpResponse, ApiError>;

    /// Create the profile for a freshly verified number. `bearer` is the
    /// token handed out at send or verify time, when there was one.
    async fn register(
        &self,
        path: &str,
        phone_number: &str,
        name: &str,
        bearer: Option<&str>,
    ) -> Result<RegisterResponse, ApiError>;
}

#[async_trait]
impl<T: BaseAuthApi + ?Sized> BaseAuthApi for Arc<T> {
    async fn send_otp(
        &self,
        path: &str,
        phone_number: &str,
    ) -> Result<SendOtpResponse, ApiError> {
        (**self).send_otp(path, phone_number).await
    }

    async fn verify_otp(
        &self,
        path: &str,
        phone_number: &str,
        otp: &str,
    ) -> Result<VerifyOtpResponse, ApiError> {
        (**self).verify_otp(path, phone_number, otp).await
    }

    async fn register(
        &self,
        path: &str,
        phone_number: &str,
        name: &str,
        bearer: Option<&str>,
    ) -> Result<RegisterResponse, ApiError> {
        (**self).register(path, phone_number, name, bearer).await
    }
}
