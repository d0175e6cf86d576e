use crate::provider::SmsProvider;

#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    Verified,
    Retry { errors: String },
}

/// Forwards an id/token pair to the provider's verification check.
/// Independent of the booking flow apart from sharing the provider client.
pub async fn verify<P: SmsProvider>(provider: &P, id: &str, token: &str) -> VerificationOutcome {
    match provider.verify_token(id, token).await {
        Ok(()) => VerificationOutcome::Verified,
        Err(err) => {
            tracing::warn!(error = %err, "token verification failed");
            VerificationOutcome::Retry {
                errors: err.to_string(),
            }
        }
    }
}
