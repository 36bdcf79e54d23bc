pub mod error;
pub mod import;
pub mod notification;

pub use error::{Error, Result};
pub use notification::{Notification, NotificationKind};
