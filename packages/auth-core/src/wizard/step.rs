use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    PhoneEntry = 1,
    OtpEntry = 2,
    NameEntry = 3,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WizardStep::PhoneEntry => "phone entry",
            WizardStep::OtpEntry => "OTP entry",
            WizardStep::NameEntry => "name entry",
        })
    }
}
