use baynana_api::ApiError;
use tracing::{debug, info, warn};

use super::{hydrate, BusyFlag, WizardProgress, WizardResult, WizardStep};
use crate::error::{AuthError, Result};
use crate::flows::FlowConfig;
use crate::kernel::BaseAuthApi;
use crate::models::{DisplayName, OtpCode, PhoneNumber};
use crate::outcome::VerifyOutcome;
use crate::session::{SessionFields, SessionStorage, SessionStore};

/// Which backend call failed, for mapping HTTP errors to messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Send,
    Verify,
    Register { authenticated: bool },
}

/// One wizard run for one flow variant.
///
/// Operations take `&mut self`, so a single instance can never have two
/// requests in flight; dropping an operation's future abandons the request
/// without touching wizard state.
pub struct OtpWizard<A, S> {
    flow: FlowConfig,
    api: A,
    session: SessionStore<S>,
    step: WizardStep,
    phone: Option<PhoneNumber>,
    pending_token: Option<String>,
    error: Option<String>,
    busy: BusyFlag,
}

impl<A: BaseAuthApi, S: SessionStorage> OtpWizard<A, S> {
    pub fn new(flow: FlowConfig, api: A, session: SessionStore<S>) -> Self {
        Self {
            flow,
            api,
            session,
            step: WizardStep::PhoneEntry,
            phone: None,
            pending_token: None,
            error: None,
            busy: BusyFlag::new(),
        }
    }

    pub fn flow(&self) -> &FlowConfig {
        &self.flow
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Phone number the current code was sent to.
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// Most recent failure, replaced by every new attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Validate `phone` and ask the backend to send a code to it.
    pub async fn request_code(&mut self, phone: &str) -> Result<WizardProgress> {
        self.error = None;
        let result = self.send_code(phone).await;
        self.settle(result)
    }

    /// Send another code to the already-entered number.
    pub async fn resend_code(&mut self) -> Result<WizardProgress> {
        self.error = None;
        let result = self.send_again().await;
        self.settle(result)
    }

    /// Check `code`. Completes for an existing account, otherwise moves on
    /// to name entry without touching the session.
    pub async fn verify_code(&mut self, code: &str) -> Result<WizardProgress> {
        self.error = None;
        let result = self.check_code(code).await;
        self.settle(result)
    }

    /// Create the profile for a new account and complete.
    pub async fn register(&mut self, name: &str) -> Result<WizardProgress> {
        self.error = None;
        let result = self.submit_name(name).await;
        self.settle(result)
    }

    /// The "Edit" affordance: back to phone entry, forgetting the number.
    pub fn edit_phone(&mut self) -> WizardStep {
        if self.step != WizardStep::PhoneEntry {
            info!(flow = %self.flow.kind, from = %self.step, "Editing phone number");
        }
        self.reset();
        self.step
    }

    /// Abandon the run. Nothing is persisted.
    pub fn cancel(&mut self) -> WizardResult {
        debug!(flow = %self.flow.kind, step = %self.step, "Wizard cancelled");
        self.reset();
        WizardResult::Cancelled
    }

    // =========================================================================
    // Steps
    // =========================================================================

    async fn send_code(&mut self, input: &str) -> Result<WizardProgress> {
        self.expect_step(WizardStep::PhoneEntry)?;
        let phone = PhoneNumber::parse(input)?;
        let _busy = self.busy.acquire()?;

        info!(flow = %self.flow.kind, phone = %phone.masked(), "Requesting OTP");
        let resp = self
            .api
            .send_otp(self.flow.send_path, phone.as_str())
            .await
            .map_err(|e| self.classify(e, Call::Send))?;

        if !resp.success {
            return Err(AuthError::rejected(resp.message));
        }

        self.pending_token = resp.token.filter(|t| !t.is_empty());
        self.phone = Some(phone);
        self.step = WizardStep::OtpEntry;
        Ok(WizardProgress::Advanced(WizardStep::OtpEntry))
    }

    async fn send_again(&mut self) -> Result<WizardProgress> {
        self.expect_step(WizardStep::OtpEntry)?;
        let phone = self.locked_phone()?;
        let _busy = self.busy.acquire()?;

        info!(flow = %self.flow.kind, phone = %phone.masked(), "Resending OTP");
        let resp = self
            .api
            .send_otp(self.flow.send_path, phone.as_str())
            .await
            .map_err(|e| self.classify(e, Call::Send))?;

        if !resp.success {
            return Err(AuthError::rejected(resp.message));
        }

        if let Some(token) = resp.token.filter(|t| !t.is_empty()) {
            self.pending_token = Some(token);
        }
        Ok(WizardProgress::Advanced(WizardStep::OtpEntry))
    }

    async fn check_code(&mut self, input: &str) -> Result<WizardProgress> {
        self.expect_step(WizardStep::OtpEntry)?;
        let code = OtpCode::parse(input, self.flow.otp_len)?;
        let phone = self.locked_phone()?;
        let _busy = self.busy.acquire()?;

        info!(flow = %self.flow.kind, phone = %phone.masked(), "Verifying OTP");
        let resp = self
            .api
            .verify_otp(self.flow.verify_path, phone.as_str(), code.as_str())
            .await
            .map_err(|e| self.classify(e, Call::Verify))?;

        if !resp.success {
            return Err(AuthError::rejected(resp.message));
        }

        let outcome = self
            .flow
            .verify_shape
            .map(phone.as_str(), &resp)
            .map_err(|e| {
                warn!(flow = %self.flow.kind, error = %e, "Unusable verify reply");
                AuthError::rejected(None)
            })?;

        match outcome {
            VerifyOutcome::KnownUser(user) => {
                info!(flow = %self.flow.kind, "Existing account verified");
                self.complete(&hydrate::known_user_fields(&user))
            }
            VerifyOutcome::NewUser { token } => {
                info!(flow = %self.flow.kind, "New account verified, asking for name");
                if token.is_some() {
                    self.pending_token = token;
                }
                self.step = WizardStep::NameEntry;
                Ok(WizardProgress::Advanced(WizardStep::NameEntry))
            }
        }
    }

    async fn submit_name(&mut self, input: &str) -> Result<WizardProgress> {
        self.expect_step(WizardStep::NameEntry)?;
        let name = DisplayName::parse(input, self.flow.min_name_len)?;
        let phone = self.locked_phone()?;
        let _busy = self.busy.acquire()?;

        let bearer = self.pending_token.clone();
        info!(flow = %self.flow.kind, phone = %phone.masked(), "Registering account");
        let resp = self
            .api
            .register(
                self.flow.register_path,
                phone.as_str(),
                name.as_str(),
                bearer.as_deref(),
            )
            .await
            .map_err(|e| {
                self.classify(
                    e,
                    Call::Register {
                        authenticated: bearer.is_some(),
                    },
                )
            })?;

        if !resp.success {
            return Err(AuthError::rejected(resp.message));
        }

        let Some(token) = resp.token.filter(|t| !t.is_empty()).or(bearer) else {
            warn!(flow = %self.flow.kind, "Registration succeeded but no token was issued");
            return Err(AuthError::rejected(None));
        };

        self.complete(&hydrate::registered_fields(
            &token,
            resp.user_id,
            name.as_str(),
            phone.as_str(),
        ))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn complete(&mut self, fields: &SessionFields) -> Result<WizardProgress> {
        self.session.replace(fields)?;
        let session = self.session.read();
        info!(flow = %self.flow.kind, "Session hydrated");
        self.reset();
        Ok(WizardProgress::Completed(session))
    }

    fn reset(&mut self) {
        self.step = WizardStep::PhoneEntry;
        self.phone = None;
        self.pending_token = None;
        self.error = None;
    }

    fn settle(&mut self, result: Result<WizardProgress>) -> Result<WizardProgress> {
        if let Err(e) = &result {
            debug!(flow = %self.flow.kind, step = %self.step, error = %e, "Wizard step failed");
            self.error = Some(e.user_message());
        }
        result
    }

    fn expect_step(&self, expected: WizardStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(AuthError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    fn locked_phone(&self) -> Result<PhoneNumber> {
        self.phone.clone().ok_or(AuthError::WrongStep {
            expected: WizardStep::OtpEntry,
            actual: WizardStep::PhoneEntry,
        })
    }

    fn classify(&self, err: ApiError, call: Call) -> AuthError {
        match &err {
            ApiError::Status { status: 404, .. }
                if call == Call::Send && self.flow.not_found_is_unregistered =>
            {
                info!(flow = %self.flow.kind, "Number not registered");
                AuthError::NotRegistered
            }
            ApiError::Status { status: 401, .. }
                if call == (Call::Register { authenticated: true }) =>
            {
                AuthError::SessionExpired
            }
            ApiError::Status { status, message } if *status < 500 => {
                AuthError::rejected(message.clone())
            }
            _ => {
                warn!(flow = %self.flow.kind, ?call, error = %err, "Auth request failed");
                AuthError::Transport {
                    detail: err.to_string(),
                }
            }
        }
    }
}
