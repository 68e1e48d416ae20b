mod messages;

use crate::messages::{MessageCreateRequest, TwilioApi, TwilioError};
use async_trait::async_trait;
use confirmo_core::channel::{SmsChannel, SmsMessage};
use confirmo_core::credentials::{RawCredential, TypedCredential};
use confirmo_core::error::{CredentialError, DeliveryError};

/// API credentials, supplied as "twilio:ACCOUNT_SID:AUTH_TOKEN".
#[derive(Debug, Clone)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
}

impl TryFrom<RawCredential> for TwilioCredentials {
    type Error = CredentialError;

    fn try_from(value: RawCredential) -> Result<Self, Self::Error> {
        let (account_sid, auth_token) = value
            .value
            .split_once(':')
            .ok_or(CredentialError::InvalidFormat)?;
        Ok(Self {
            account_sid: account_sid.to_owned(),
            auth_token: auth_token.to_owned(),
        })
    }
}

impl TypedCredential for TwilioCredentials {
    const TRANSPORT_NAME: &'static str = "twilio";
}

pub struct TwilioTransport {
    client: TwilioApi,
    credentials: TwilioCredentials,
}

impl TwilioTransport {
    pub fn new(client: reqwest::Client, credentials: TwilioCredentials) -> Self {
        Self {
            client: TwilioApi::new(client),
            credentials,
        }
    }
}

#[async_trait]
impl SmsChannel for TwilioTransport {
    async fn send(&self, message: &SmsMessage) -> Result<(), DeliveryError> {
        let request = MessageCreateRequest {
            body: message.body.clone(),
            from: message.from.clone(),
            to: message.to.clone(),
        };

        match self
            .client
            .message_create(
                &self.credentials.account_sid,
                &self.credentials.auth_token,
                request,
            )
            .await
        {
            Ok(()) => Ok(()),
            Err(TwilioError::ApiError { error }) => Err(DeliveryError::Rejected(error)),
            Err(e) => Err(DeliveryError::Transport(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn credential_splits_sid_and_token() {
        let raw = RawCredential::from_str("twilio:AC123:t0ken").unwrap();
        let credentials: TwilioCredentials = raw.resolve().unwrap();
        assert_eq!(credentials.account_sid, "AC123");
        assert_eq!(credentials.auth_token, "t0ken");
    }

    #[test]
    fn credential_without_token_is_rejected() {
        let raw = RawCredential::from_str("twilio:AC123").unwrap();
        assert_eq!(
            raw.resolve::<TwilioCredentials>().unwrap_err(),
            CredentialError::InvalidFormat
        );
    }

    #[test]
    fn message_encodes_as_form_fields() {
        let request = MessageCreateRequest {
            body: "hello".to_owned(),
            from: "+15550001111".to_owned(),
            to: "+15551234567".to_owned(),
        };

        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "Body=hello&From=%2B15550001111&To=%2B15551234567"
        );
    }
}
