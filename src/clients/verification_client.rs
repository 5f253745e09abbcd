//! # Verification Client
//!
//! High-level API of the Verification Code Store.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Phone, VerificationCheck, VerificationCode, VerificationIssue};
use crate::verification_actor::{CheckOutcome, VerificationAction, VerificationError};
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Verification actor.
#[derive(Clone, Debug)]
pub struct VerificationClient {
    inner: ResourceClient<VerificationCode>,
}

impl VerificationClient {
    pub fn new(inner: ResourceClient<VerificationCode>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<VerificationCode> for VerificationClient {
    type Error = VerificationError;

    fn inner(&self) -> &ResourceClient<VerificationCode> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<VerificationError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(phone)) => VerificationError::NotFound(phone),
            Err(other) => VerificationError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl VerificationClient {
    /// Stores a new pending code, replacing any previous one for the phone.
    #[instrument(skip(self, issue), fields(phone = %issue.phone))]
    pub async fn issue(&self, issue: VerificationIssue) -> Result<(), VerificationError> {
        self.inner
            .create(issue)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Checks a submitted code. A wrong code is `Ok` with `accepted == false` while
    /// attempts remain; the failing attempt that reaches the limit is
    /// [`VerificationError::TooManyAttempts`].
    #[instrument(skip(self, code))]
    pub async fn check(
        &self,
        phone: Phone,
        code: &str,
    ) -> Result<VerificationCheck, VerificationError> {
        let outcome = self
            .inner
            .perform_action(phone.clone(), VerificationAction::Check(code.to_string()))
            .await
            .map_err(Self::map_error)?;

        match outcome {
            CheckOutcome::Accepted => {
                info!("Phone verified");
                Ok(VerificationCheck {
                    accepted: true,
                    remaining_attempts: 0,
                })
            }
            CheckOutcome::Rejected { remaining } => Ok(VerificationCheck {
                accepted: false,
                remaining_attempts: remaining,
            }),
            CheckOutcome::Exhausted => Err(VerificationError::TooManyAttempts(phone.to_string())),
            CheckOutcome::Expired => Err(VerificationError::Expired(phone.to_string())),
        }
    }
}
