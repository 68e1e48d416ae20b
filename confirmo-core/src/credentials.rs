use crate::error::CredentialError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Generic credential with type information, in "transport:value" form.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct RawCredential {
    pub transport: String,
    pub value: String,
}

impl FromStr for RawCredential {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (transport, value) = s.split_once(':').ok_or(CredentialError::InvalidFormat)?;
        let (transport, value) = (transport.to_owned(), value.to_owned());
        Ok(Self { transport, value })
    }
}

impl RawCredential {
    /// Converts into a transport-specific credential, rejecting credentials
    /// tagged for a different transport.
    pub fn resolve<T: TypedCredential>(self) -> Result<T, CredentialError> {
        if self.transport != T::TRANSPORT_NAME {
            return Err(CredentialError::WrongTransport {
                expected: T::TRANSPORT_NAME,
                actual: self.transport,
            });
        }
        self.try_into()
    }
}

/// Specific credential types should implement this trait.
pub trait TypedCredential: TryFrom<RawCredential, Error = CredentialError> {
    const TRANSPORT_NAME: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TokenCredential {
        token: String,
    }

    impl TryFrom<RawCredential> for TokenCredential {
        type Error = CredentialError;

        fn try_from(value: RawCredential) -> Result<Self, Self::Error> {
            Ok(Self { token: value.value })
        }
    }

    impl TypedCredential for TokenCredential {
        const TRANSPORT_NAME: &'static str = "token";
    }

    #[test]
    fn parses_transport_and_value() {
        let credential = RawCredential::from_str("token:abc:def").unwrap();
        assert_eq!(credential.transport, "token");
        // Only the first colon separates; the value may contain more.
        assert_eq!(credential.value, "abc:def");
    }

    #[test]
    fn rejects_untagged_string() {
        assert_eq!(
            RawCredential::from_str("justavalue").unwrap_err(),
            CredentialError::InvalidFormat
        );
    }

    #[test]
    fn resolves_matching_transport() {
        let credential = RawCredential::from_str("token:s3cr3t").unwrap();
        let typed: TokenCredential = credential.resolve().unwrap();
        assert_eq!(typed.token, "s3cr3t");
    }

    #[test]
    fn rejects_mismatched_transport() {
        let credential = RawCredential::from_str("other:s3cr3t").unwrap();
        assert_eq!(
            credential.resolve::<TokenCredential>().unwrap_err(),
            CredentialError::WrongTransport {
                expected: "token",
                actual: "other".into(),
            }
        );
    }
}
