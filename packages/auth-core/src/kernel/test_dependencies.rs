// MockAuthApi - scripted backend for testing
//
// Replies are queued per endpoint kind and consumed in order. Every call is
// recorded so tests can assert on what hit the "network".

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use baynana_api::{ApiError, RegisterResponse, SendOtpResponse, VerifyOtpResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::BaseAuthApi;

/// A call that reached the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    SendOtp {
        path: String,
        phone_number: String,
    },
    VerifyOtp {
        path: String,
        phone_number: String,
        otp: String,
    },
    Register {
        path: String,
        phone_number: String,
        name: String,
        bearer: Option<String>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Result<T, ApiError>>>>;

#[derive(Default, Clone)]
pub struct MockAuthApi {
    send_replies: Queue<SendOtpResponse>,
    verify_replies: Queue<VerifyOtpResponse>,
    register_replies: Queue<RegisterResponse>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

/// Build a reply from a literal JSON payload, the way the backend sends it.
fn from_json<T: DeserializeOwned>(payload: Value) -> T {
    serde_json::from_value(payload).expect("mock payload should match response type")
}

fn next<T>(queue: &Queue<T>, endpoint: &str) -> Result<T, ApiError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Parse(format!("no mock reply queued for {endpoint}"))))
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_send(self, payload: Value) -> Self {
        self.send_replies.lock().unwrap().push_back(Ok(from_json(payload)));
        self
    }

    pub fn with_send_error(self, err: ApiError) -> Self {
        self.send_replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_verify(self, payload: Value) -> Self {
        self.verify_replies
            .lock()
            .unwrap()
            .push_back(Ok(from_json(payload)));
        self
    }

    pub fn with_verify_error(self, err: ApiError) -> Self {
        self.verify_replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_register(self, payload: Value) -> Self {
        self.register_replies
            .lock()
            .unwrap()
            .push_back(Ok(from_json(payload)));
        self
    }

    pub fn with_register_error(self, err: ApiError) -> Self {
        self.register_replies.lock().unwrap().push_back(Err(err));
        self
    }

    /// All calls made so far, oldest first
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BaseAuthApi for MockAuthApi {
    async fn send_otp(
        &self,
        path: &str,
        phone_number: &str,
    ) -> Result<SendOtpResponse, ApiError> {
        self.record(MockCall::SendOtp {
            path: path.to_string(),
            phone_number: phone_number.to_string(),
        });
        next(&self.send_replies, path)
    }

    async fn verify_otp(
        &self,
        path: &str,
        phone_number: &str,
        otp: &str,
    ) -> Result<VerifyOtpResponse, ApiError> {
        self.record(MockCall::VerifyOtp {
            path: path.to_string(),
            phone_number: phone_number.to_string(),
            otp: otp.to_string(),
        });
        next(&self.verify_replies, path)
    }

    async fn register(
        &self,
        path: &str,
        phone_number: &str,
        name: &str,
        bearer: Option<&str>,
    ) -> Result<RegisterResponse, ApiError> {
        self.record(MockCall::Register {
            path: path.to_string(),
            phone_number: phone_number.to_string(),
            name: name.to_string(),
            bearer: bearer.map(str::to_string),
        });
        next(&self.register_replies, path)
    }
}
