//! Normalizes verify-otp replies into "known user" or "new user".
//!
//! The plain and login verify endpoints signal an existing profile
//! differently (top-level `name` vs nested `user`), so each gets its own
//! mapper. Both are pure and only look at a reply with `success: true`.

use baynana_api::VerifyOtpResponse;
use thiserror::Error;

/// An account that already has a profile: enough to hydrate a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownUser {
    pub token: String,
    pub name: String,
    pub phone: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    KnownUser(KnownUser),
    /// Verified number with no profile yet; the wizard asks for a name.
    NewUser { token: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("verify reply identified a user but carried no token")]
    MissingToken,
}

/// Which field of the verify reply marks an existing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyShape {
    /// `{ token, name? }` from `/api/user/verify-otp`
    NameField,
    /// `{ token, user?: { name, mobile, id } }` from `/api/user/login/verify-otp`
    UserObject,
}

impl VerifyShape {
    pub fn map(
        self,
        entered_phone: &str,
        resp: &VerifyOtpResponse,
    ) -> Result<VerifyOutcome, OutcomeError> {
        match self {
            VerifyShape::NameField => from_name_field(entered_phone, resp),
            VerifyShape::UserObject => from_user_object(entered_phone, resp),
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn token_of(resp: &VerifyOtpResponse) -> Option<String> {
    non_blank(resp.token.as_ref()).map(str::to_string)
}

pub fn from_name_field(
    entered_phone: &str,
    resp: &VerifyOtpResponse,
) -> Result<VerifyOutcome, OutcomeError> {
    let Some(name) = non_blank(resp.name.as_ref()) else {
        return Ok(VerifyOutcome::NewUser {
            token: token_of(resp),
        });
    };

    Ok(VerifyOutcome::KnownUser(KnownUser {
        token: token_of(resp).ok_or(OutcomeError::MissingToken)?,
        name: name.to_string(),
        phone: entered_phone.to_string(),
        id: resp.user_id.clone(),
    }))
}

pub fn from_user_object(
    entered_phone: &str,
    resp: &VerifyOtpResponse,
) -> Result<VerifyOutcome, OutcomeError> {
    let user = resp.user.as_ref();
    let Some(name) = user.and_then(|u| non_blank(u.name.as_ref())) else {
        return Ok(VerifyOutcome::NewUser {
            token: token_of(resp),
        });
    };

    Ok(VerifyOutcome::KnownUser(KnownUser {
        token: token_of(resp).ok_or(OutcomeError::MissingToken)?,
        name: name.to_string(),
        phone: user
            .and_then(|u| non_blank(u.mobile.as_ref()))
            .unwrap_or(entered_phone)
            .to_string(),
        id: user.and_then(|u| u.id.clone()).or_else(|| resp.user_id.clone()),
    }))
}
