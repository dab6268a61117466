//! Shared helpers for wizard tests.

#![allow(dead_code)]

use auth_core::kernel::MockAuthApi;
use auth_core::session::MemoryStorage;
use auth_core::{FlowConfig, OtpWizard, SessionStore};

pub const PHONE: &str = "9876543210";
pub const CODE: &str = "123456";

/// A wizard over a scripted backend and in-memory storage, plus handles to
/// both so tests can inspect calls and persisted keys afterwards.
pub struct Harness {
    pub wizard: OtpWizard<MockAuthApi, MemoryStorage>,
    pub api: MockAuthApi,
    pub storage: MemoryStorage,
}

impl Harness {
    pub fn new(flow: FlowConfig, api: MockAuthApi) -> Self {
        let storage = MemoryStorage::new();
        let wizard = OtpWizard::new(flow, api.clone(), SessionStore::new(storage.clone()));
        Self {
            wizard,
            api,
            storage,
        }
    }
}
