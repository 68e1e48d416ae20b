use crate::booking::BookingRecord;
use crate::dispatcher::Dispatcher;
use crate::queue::ReceiverChannel;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Reacts to booking-record creation. Every record inserted into the feed
/// gets exactly one dispatch invocation; a record that cannot be decoded is
/// logged and skipped without taking the pump down.
pub struct CreationTrigger {
    feed: Arc<dyn ReceiverChannel>,
    dispatcher: Arc<Dispatcher>,
}

impl CreationTrigger {
    pub fn new(feed: Arc<dyn ReceiverChannel>, dispatcher: Arc<Dispatcher>) -> Self {
        Self { feed, dispatcher }
    }

    /// Consumes the feed until it closes, then waits out the in-flight
    /// dispatches before returning. Completed invocations are reaped as the
    /// pump runs; the set only ever holds in-flight work.
    pub async fn run(self) {
        let mut invocations = JoinSet::new();
        loop {
            tokio::select! {
                message = self.feed.receive() => {
                    match message {
                        Ok(message) => {
                            debug!("Received booking record: {message}");
                            let record: BookingRecord = match serde_json::from_str(&message) {
                                Ok(record) => record,
                                Err(e) => {
                                    warn!("Discarding malformed booking record: {e}");
                                    continue;
                                }
                            };
                            let dispatcher = self.dispatcher.clone();
                            let _handle = invocations
                                .spawn(async move { dispatcher.dispatch(&record).await });
                        }
                        Err(_) => break,
                    }
                }
                Some(_) = invocations.join_next() => {}
            }
        }
        while invocations.join_next().await.is_some() {}
    }
}
