use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::model::{Credential, CredentialStatus};

pub struct CheckCredentialParams {
    pub name: String,
    pub credential: Credential,
}

pub trait CheckCredentialUseCase: Send + Sync {
    fn execute(&self, params: CheckCredentialParams)
    -> Result<CredentialStatus, CredentialError>;
}
