pub mod booking;
pub mod channel;
pub mod credentials;
pub mod dispatcher;
pub mod error;
pub mod queue;
pub mod recorder;
pub mod trigger;
