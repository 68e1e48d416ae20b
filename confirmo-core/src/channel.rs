use crate::error::DeliveryError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The two delivery channels a confirmation goes out on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
}

impl Display for ChannelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Email => f.write_str("email"),
            ChannelKind::Sms => f.write_str("sms"),
        }
    }
}

/// A fully composed confirmation email, ready for provider handoff.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// A fully composed confirmation text message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SmsMessage {
    pub body: String,
    pub from: String,
    pub to: String,
}

/// Email delivery provider. One call per message, no retry here.
#[async_trait]
pub trait EmailChannel: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError>;
}

/// SMS delivery provider. Same single-shot contract as email.
#[async_trait]
pub trait SmsChannel: Send + Sync {
    async fn send(&self, message: &SmsMessage) -> Result<(), DeliveryError>;
}
