// Production wiring: the REST client behind `BaseAuthApi`.

use async_trait::async_trait;
use baynana_api::{
    ApiError, BaynanaClient, RegisterResponse, SendOtpResponse, VerifyOtpResponse,
};

use super::BaseAuthApi;

#[async_trait]
impl BaseAuthApi for BaynanaClient {
    async fn send_otp(
        &self,
        path: &str,
        phone_number: &str,
    ) -> Result<SendOtpResponse, ApiError> {
        BaynanaClient::send_otp(self, path, phone_number).await
    }

    async fn verify_otp(
        &self,
        path: &str,
        phone_number: &str,
        otp: &str,
    ) -> Result<VerifyOtpResponse, ApiError> {
        BaynanaClient::verify_otp(self, path, phone_number, otp).await
    }

    async fn register(
        &self,
        path: &str,
        phone_number: &str,
        name: &str,
        bearer: Option<&str>,
    ) -> Result<RegisterResponse, ApiError> {
        match bearer {
            Some(token) => {
                self.clone()
                    .with_token(token)
                    .register(path, phone_number, name)
                    .await
            }
            None => BaynanaClient::register(self, path, phone_number, name).await,
        }
    }
}
