use crate::channel::ChannelKind;
use tracing::{error, info};
use uuid::Uuid;

/// Sink for per-channel delivery outcomes. Attempts are transient; whatever
/// the recorder does with them is the only trace they leave.
pub trait Recorder: Send + Sync + 'static {
    fn record_sent(&self, booking_id: Uuid, channel: ChannelKind);
    fn record_failed(&self, booking_id: Uuid, channel: ChannelKind, error: &str);
}

/// Default recorder: outcomes go to the log and nowhere else.
pub struct BaseRecorder {}

impl BaseRecorder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Recorder for BaseRecorder {
    fn record_sent(&self, booking_id: Uuid, channel: ChannelKind) {
        info!("Confirmation sent: {booking_id}/{channel}");
    }

    fn record_failed(&self, booking_id: Uuid, channel: ChannelKind, error: &str) {
        error!("Failed to send confirmation: {booking_id}/{channel} - {error}");
    }
}
