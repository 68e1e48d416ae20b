use crate::booking::BookingRecord;
use crate::channel::{ChannelKind, EmailChannel, EmailMessage, SmsChannel, SmsMessage};
use crate::recorder::Recorder;
use serde::Serialize;
use std::sync::Arc;

const EMAIL_SUBJECT: &str = "Appointment Confirmation";

/// Addressing applied to every outgoing confirmation.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// `From` address on confirmation emails.
    pub sender_address: String,
    /// Originating number on confirmation texts, E.164.
    pub origin_number: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AttemptStatus {
    Sent,
    Failed { error: String },
}

/// Result of one delivery attempt on one channel.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct NotificationAttempt {
    pub channel: ChannelKind,
    #[serde(flatten)]
    pub status: AttemptStatus,
}

impl NotificationAttempt {
    pub fn is_sent(&self) -> bool {
        matches!(self.status, AttemptStatus::Sent)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            AttemptStatus::Sent => None,
            AttemptStatus::Failed { error } => Some(error),
        }
    }
}

/// Per-record dispatch result. Always carries both attempts, whatever
/// their status.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DispatchOutcome {
    pub email: NotificationAttempt,
    pub sms: NotificationAttempt,
}

/// Sends a confirmation over every channel for each booking record it is
/// handed. A failure on one channel never short-circuits the other: both
/// attempts always run to completion and the outcome reports each verdict
/// separately.
pub struct Dispatcher {
    email: Arc<dyn EmailChannel>,
    sms: Arc<dyn SmsChannel>,
    recorder: Arc<dyn Recorder>,
    config: DispatcherConfig,
}

impl Dispatcher {
    pub fn new(
        email: Arc<dyn EmailChannel>,
        sms: Arc<dyn SmsChannel>,
        recorder: Arc<dyn Recorder>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            email,
            sms,
            recorder,
            config,
        }
    }

    /// Attempts both channels for one record. Infallible: provider errors
    /// are folded into the returned attempts, not propagated.
    pub async fn dispatch(&self, record: &BookingRecord) -> DispatchOutcome {
        let (email, sms) = tokio::join!(self.send_email(record), self.send_sms(record));
        DispatchOutcome { email, sms }
    }

    pub async fn send_email(&self, record: &BookingRecord) -> NotificationAttempt {
        let message = self.compose_email(record);
        let status = match self.email.send(&message).await {
            Ok(()) => {
                self.recorder.record_sent(record.id, ChannelKind::Email);
                AttemptStatus::Sent
            }
            Err(e) => {
                let error = e.to_string();
                self.recorder
                    .record_failed(record.id, ChannelKind::Email, &error);
                AttemptStatus::Failed { error }
            }
        };
        NotificationAttempt {
            channel: ChannelKind::Email,
            status,
        }
    }

    pub async fn send_sms(&self, record: &BookingRecord) -> NotificationAttempt {
        let message = self.compose_sms(record);
        let status = match self.sms.send(&message).await {
            Ok(()) => {
                self.recorder.record_sent(record.id, ChannelKind::Sms);
                AttemptStatus::Sent
            }
            Err(e) => {
                let error = e.to_string();
                self.recorder
                    .record_failed(record.id, ChannelKind::Sms, &error);
                AttemptStatus::Failed { error }
            }
        };
        NotificationAttempt {
            channel: ChannelKind::Sms,
            status,
        }
    }

    fn compose_email(&self, record: &BookingRecord) -> EmailMessage {
        let date = record.formatted_date();
        EmailMessage {
            to: record.email.clone(),
            from: self.config.sender_address.clone(),
            subject: EMAIL_SUBJECT.into(),
            text: format!(
                "Dear {},\n\nYour appointment for {} on {} has been confirmed.\n\nThank you for choosing our salon!",
                record.name, record.service, date
            ),
            html: format!(
                "<p>Dear {},</p><p>Your appointment for <strong>{}</strong> on <strong>{}</strong> has been confirmed.</p><p>Thank you for choosing our salon!</p>",
                record.name, record.service, date
            ),
        }
    }

    fn compose_sms(&self, record: &BookingRecord) -> SmsMessage {
        SmsMessage {
            body: format!(
                "Your appointment for {} on {} has been confirmed. Thank you for choosing our salon!",
                record.service,
                record.formatted_date()
            ),
            from: self.config.origin_number.clone(),
            to: record.phone.clone(),
        }
    }
}
