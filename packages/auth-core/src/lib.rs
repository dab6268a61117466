// Baynana auth core
//
// Phone-OTP login/signup wizard plus the client-side session it hydrates.
// The wizard reaches the backend only through `kernel::BaseAuthApi` and
// persists only through `session::SessionStorage`.

pub mod config;
pub mod error;
pub mod flows;
pub mod kernel;
pub mod models;
pub mod outcome;
pub mod session;
pub mod wizard;

pub use config::Config;
pub use error::{AuthError, Result};
pub use flows::{FlowConfig, FlowKind};
pub use session::{Session, SessionFields, SessionStore};
pub use wizard::{OtpWizard, WizardProgress, WizardResult, WizardStep};
