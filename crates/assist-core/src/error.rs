use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistError {
    /// The message is part of the HTTP contract; the id is kept for logging.
    #[error("Ticket not found")]
    TicketNotFound(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssistError>;
