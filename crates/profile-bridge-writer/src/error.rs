use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No notification sink attached")]
    SinkDetached,

    #[error("Notification sink error: {0}")]
    Sink(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize notification: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] profile_bridge_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
