//! The three places the wizard is mounted, and how they differ.

use std::fmt;

use baynana_api::paths;

use crate::outcome::VerifyShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Login,
    Signup,
    FreeListing,
}

impl FlowKind {
    pub fn label(&self) -> &'static str {
        match self {
            FlowKind::Login => "Login",
            FlowKind::Signup => "Sign Up",
            FlowKind::FreeListing => "Free Listing",
        }
    }

    pub fn config(self) -> FlowConfig {
        match self {
            FlowKind::Login => FlowConfig::login(),
            FlowKind::Signup => FlowConfig::signup(),
            FlowKind::FreeListing => FlowConfig::free_listing(),
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Endpoints and rules for one flow variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub kind: FlowKind,
    pub send_path: &'static str,
    pub verify_path: &'static str,
    pub register_path: &'static str,
    pub verify_shape: VerifyShape,
    pub otp_len: usize,
    pub min_name_len: usize,
    /// Map HTTP 404 from `send_path` to "not registered" instead of the
    /// generic rejection.
    pub not_found_is_unregistered: bool,
}

impl FlowConfig {
    pub fn login() -> Self {
        Self {
            kind: FlowKind::Login,
            send_path: paths::LOGIN_SEND_OTP,
            verify_path: paths::LOGIN_VERIFY_OTP,
            register_path: paths::REGISTER,
            verify_shape: VerifyShape::UserObject,
            otp_len: 6,
            min_name_len: 2,
            not_found_is_unregistered: true,
        }
    }

    pub fn signup() -> Self {
        Self {
            kind: FlowKind::Signup,
            send_path: paths::SIGNUP_SEND_OTP,
            verify_path: paths::VERIFY_OTP,
            register_path: paths::REGISTER,
            verify_shape: VerifyShape::NameField,
            otp_len: 6,
            min_name_len: 3,
            not_found_is_unregistered: false,
        }
    }

    pub fn free_listing() -> Self {
        Self {
            kind: FlowKind::FreeListing,
            send_path: paths::SEND_OTP,
            verify_path: paths::VERIFY_OTP,
            register_path: paths::REGISTER,
            verify_shape: VerifyShape::NameField,
            otp_len: 6,
            min_name_len: 2,
            not_found_is_unregistered: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_login_maps_not_found() {
        assert!(FlowConfig::login().not_found_is_unregistered);
        assert!(!FlowConfig::signup().not_found_is_unregistered);
        assert!(!FlowConfig::free_listing().not_found_is_unregistered);
    }

    #[test]
    fn test_all_modal_flows_use_six_digit_codes() {
        for kind in [FlowKind::Login, FlowKind::Signup, FlowKind::FreeListing] {
            assert_eq!(kind.config().otp_len, 6, "{kind}");
        }
    }

    #[test]
    fn test_endpoints() {
        let login = FlowConfig::login();
        assert_eq!(login.send_path, "/api/user/login/send-otp");
        assert_eq!(login.verify_path, "/api/user/login/verify-otp");
        assert_eq!(login.verify_shape, VerifyShape::UserObject);

        let signup = FlowConfig::signup();
        assert_eq!(signup.send_path, "/api/user/signup/send-otp");
        assert_eq!(signup.verify_path, "/api/user/verify-otp");
        assert_eq!(signup.min_name_len, 3);

        let listing = FlowConfig::free_listing();
        assert_eq!(listing.send_path, "/api/user/send-otp");
        assert_eq!(listing.register_path, "/api/user/register");
        assert_eq!(listing.min_name_len, 2);
    }
}
