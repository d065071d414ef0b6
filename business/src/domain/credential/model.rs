use secrecy::{ExposeSecret, SecretString};

/// Name of the environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// API key looked up from the environment.
///
/// Absence is a valid state: the key is only checked for presence, and a
/// missing key is reported rather than rejected unless the policy says so.
#[derive(Debug, Clone)]
pub struct Credential {
    value: Option<SecretString>,
}

impl Credential {
    pub fn new(value: Option<String>) -> Self {
        Self {
            value: value.map(SecretString::new),
        }
    }

    pub fn absent() -> Self {
        Self { value: None }
    }

    /// A defined variable counts as present, even when empty.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn expose(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.expose_secret().as_str())
    }
}

/// What to do when the credential is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialPolicy {
    /// Report presence and continue regardless.
    #[default]
    Report,
    /// Fail before any network call.
    Require,
}

impl std::fmt::Display for CredentialPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialPolicy::Report => write!(f, "report"),
            CredentialPolicy::Require => write!(f, "require"),
        }
    }
}

/// Outcome of a credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStatus {
    pub name: String,
    pub present: bool,
}
