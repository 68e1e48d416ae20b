mod mailsend;

use crate::mailsend::{
    EmailAddress, MailContent, MailSend, Personalization, SendGridApi, SendGridError,
};
use async_trait::async_trait;
use confirmo_core::channel::{EmailChannel, EmailMessage};
use confirmo_core::credentials::{RawCredential, TypedCredential};
use confirmo_core::error::{CredentialError, DeliveryError};

#[derive(Debug, Clone)]
pub struct SendGridCredentials {
    pub api_key: String,
}

impl TryFrom<RawCredential> for SendGridCredentials {
    type Error = CredentialError;

    fn try_from(value: RawCredential) -> Result<Self, Self::Error> {
        Ok(Self {
            api_key: value.value,
        })
    }
}

impl TypedCredential for SendGridCredentials {
    const TRANSPORT_NAME: &'static str = "sendgrid";
}

pub struct SendGridTransport {
    client: SendGridApi,
    credentials: SendGridCredentials,
}

impl SendGridTransport {
    pub fn new(client: reqwest::Client, credentials: SendGridCredentials) -> Self {
        Self {
            client: SendGridApi::new(client),
            credentials,
        }
    }
}

fn build_request(message: &EmailMessage) -> MailSend {
    MailSend {
        personalizations: vec![Personalization {
            to: vec![EmailAddress {
                email: message.to.clone(),
            }],
        }],
        from: EmailAddress {
            email: message.from.clone(),
        },
        subject: message.subject.clone(),
        content: vec![
            MailContent {
                content_type: "text/plain".to_owned(),
                value: message.text.clone(),
            },
            MailContent {
                content_type: "text/html".to_owned(),
                value: message.html.clone(),
            },
        ],
    }
}

#[async_trait]
impl EmailChannel for SendGridTransport {
    async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
        let request = build_request(message);

        match self
            .client
            .mail_send(&self.credentials.api_key, request)
            .await
        {
            Ok(()) => Ok(()),
            Err(SendGridError::ApiError { error }) => Err(DeliveryError::Rejected(error)),
            Err(e) => Err(DeliveryError::Transport(e.into())),
        }
    }
}
