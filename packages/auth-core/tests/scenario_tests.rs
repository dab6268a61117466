//! Reference scenarios for the signup/login wizard, end to end over HTTP.
//!
//! These run the real REST client against a mock server and persist to a
//! session file, the same wiring the CLI uses.

use auth_core::session::{keys, FileStorage, SessionStorage};
use auth_core::{FlowConfig, OtpWizard, SessionStore, WizardProgress, WizardStep};
use baynana_api::{paths, BaynanaClient};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Scenario {
    server: MockServer,
    dir: TempDir,
}

impl Scenario {
    async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn session_path(&self) -> std::path::PathBuf {
        self.dir.path().join("session.json")
    }

    fn wizard(&self, flow: FlowConfig) -> OtpWizard<BaynanaClient, FileStorage> {
        OtpWizard::new(
            flow,
            BaynanaClient::new(self.server.uri()).unwrap(),
            SessionStore::new(FileStorage::new(self.session_path())),
        )
    }

    fn stored(&self, key: &str) -> Option<String> {
        FileStorage::new(self.session_path()).get(key)
    }

    async fn reply(&self, route: &str, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

#[tokio::test]
async fn scenario_a_valid_phone_advances_to_otp_entry() {
    let s = Scenario::start().await;
    Mock::given(method("POST"))
        .and(path(paths::SEND_OTP))
        .and(body_json(json!({ "phoneNumber": "9876543210" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&s.server)
        .await;

    let mut wizard = s.wizard(FlowConfig::free_listing());
    wizard.request_code("9876543210").await.unwrap();

    assert_eq!(wizard.step(), WizardStep::OtpEntry);
}

#[tokio::test]
async fn scenario_b_short_phone_is_rejected_locally() {
    let s = Scenario::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&s.server)
        .await;

    let mut wizard = s.wizard(FlowConfig::free_listing());
    wizard.request_code("98765").await.unwrap_err();

    assert_eq!(
        wizard.error(),
        Some("Please enter a valid 10-digit phone number.")
    );
    assert_eq!(wizard.step(), WizardStep::PhoneEntry);
}

#[tokio::test]
async fn scenario_c_known_user_completes_without_name_entry() {
    let s = Scenario::start().await;
    s.reply(paths::SEND_OTP, 200, json!({ "success": true })).await;
    s.reply(
        paths::VERIFY_OTP,
        200,
        json!({ "success": true, "token": "abc", "name": "Asha" }),
    )
    .await;

    let mut wizard = s.wizard(FlowConfig::free_listing());
    wizard.request_code("9876543210").await.unwrap();
    let progress = wizard.verify_code("123456").await.unwrap();

    assert!(matches!(progress, WizardProgress::Completed(_)));
    assert_ne!(wizard.step(), WizardStep::NameEntry);
    assert_eq!(s.stored(keys::TOKEN).as_deref(), Some("abc"));
    assert_eq!(s.stored(keys::USER_NAME).as_deref(), Some("Asha"));
}

#[tokio::test]
async fn scenario_d_new_user_moves_to_name_entry() {
    let s = Scenario::start().await;
    s.reply(paths::SEND_OTP, 200, json!({ "success": true })).await;
    s.reply(paths::VERIFY_OTP, 200, json!({ "success": true, "token": "abc" }))
        .await;

    let mut wizard = s.wizard(FlowConfig::free_listing());
    wizard.request_code("9876543210").await.unwrap();
    wizard.verify_code("123456").await.unwrap();

    assert_eq!(wizard.step(), WizardStep::NameEntry);
    assert_eq!(s.stored(keys::USER_NAME), None);
    assert_eq!(s.stored(keys::TOKEN), None);
}

#[tokio::test]
async fn scenario_e_login_not_found_differs_from_signup() {
    let s = Scenario::start().await;
    s.reply(paths::LOGIN_SEND_OTP, 404, json!({ "success": false })).await;
    s.reply(paths::SIGNUP_SEND_OTP, 404, json!({ "success": false })).await;

    let mut login = s.wizard(FlowConfig::login());
    login.request_code("9876543210").await.unwrap_err();

    let mut signup = s.wizard(FlowConfig::signup());
    signup.request_code("9876543210").await.unwrap_err();

    assert_eq!(
        login.error(),
        Some("Number not registered. Please Sign Up first.")
    );
    assert_eq!(
        signup.error(),
        Some("Something went wrong. Please try again.")
    );
}

#[tokio::test]
async fn new_user_registers_then_logout_clears_everything() {
    let s = Scenario::start().await;
    s.reply(paths::SIGNUP_SEND_OTP, 200, json!({ "success": true })).await;
    s.reply(paths::VERIFY_OTP, 200, json!({ "success": true, "token": "abc" }))
        .await;
    s.reply(paths::REGISTER, 200, json!({ "success": true, "userId": "u-1" }))
        .await;

    let mut wizard = s.wizard(FlowConfig::signup());
    wizard.request_code("9876543210").await.unwrap();
    wizard.verify_code("123456").await.unwrap();
    wizard.register("Asha").await.unwrap();

    assert_eq!(s.stored(keys::USER_ID).as_deref(), Some("u-1"));
    assert_eq!(s.stored(keys::USER_PHONE).as_deref(), Some("9876543210"));

    let store = SessionStore::new(FileStorage::new(s.session_path()));
    store.clear().unwrap();

    let session = store.read();
    assert_eq!(session, auth_core::Session::default());
    for key in keys::ALL {
        assert_eq!(s.stored(key), None, "{key}");
    }
}
