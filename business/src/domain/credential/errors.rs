#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential.missing: {name} is not set")]
    Missing { name: String },
}
