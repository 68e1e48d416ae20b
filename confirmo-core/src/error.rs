use std::error::Error;
use thiserror::Error;

/// Failure of one delivery attempt, as reported by a channel.
///
/// Delivery errors are always consumed at the attempt boundary: the
/// dispatcher records them and moves on, they never abort an invocation.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The provider answered and refused the message (bad recipient,
    /// auth failure, rate limit, ...). Carries the provider's own detail.
    #[error("provider rejected the message: {0}")]
    Rejected(String),
    /// The request never got a usable answer (connect, TLS, timeout).
    #[error(transparent)]
    Transport(Box<dyn Error + Send + Sync>),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CredentialError {
    #[error("invalid credential format")]
    InvalidFormat,
    #[error("credential is for transport {actual:?}, expected {expected:?}")]
    WrongTransport {
        expected: &'static str,
        actual: String,
    },
}
