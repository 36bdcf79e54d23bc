//! Forwards imported browser-profile batches to a notification sink.
//!
//! An import engine calls one [`ImportTarget`] method per data category.
//! [`ProfileWriter`] turns each batch into a generic JSON payload and emits it
//! under a fixed notification name to whatever [`NotificationSink`] the
//! embedding application attached.

mod error;
mod payload;
mod replay;
mod sink;
mod target;
mod writer;

pub use error::{Error, Result};
pub use payload::FAVICON_DATA_URL_PREFIX;
pub use replay::{replay, replay_file};
pub use sink::{JsonLinesSink, NotificationSink, RecordingSink};
pub use target::ImportTarget;
pub use writer::ProfileWriter;
