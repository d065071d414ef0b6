use std::sync::Arc;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::model::{CredentialPolicy, CredentialStatus};
use crate::domain::credential::use_cases::check::{CheckCredentialParams, CheckCredentialUseCase};
use crate::domain::logger::Logger;

pub struct CheckCredentialUseCaseImpl {
    pub policy: CredentialPolicy,
    pub logger: Arc<dyn Logger>,
}

impl CheckCredentialUseCase for CheckCredentialUseCaseImpl {
    fn execute(
        &self,
        params: CheckCredentialParams,
    ) -> Result<CredentialStatus, CredentialError> {
        let present = params.credential.is_present();

        self.logger.debug(&format!(
            "Checking credential {} (policy: {})",
            params.name, self.policy
        ));

        if !present {
            match self.policy {
                CredentialPolicy::Report => {
                    self.logger.warn(&format!(
                        "{} is not set, the request will be sent without a key",
                        params.name
                    ));
                }
                CredentialPolicy::Require => {
                    self.logger
                        .error(&format!("{} is not set, aborting", params.name));
                    return Err(CredentialError::Missing { name: params.name });
                }
            }
        }

        Ok(CredentialStatus {
            name: params.name,
            present,
        })
    }
}
