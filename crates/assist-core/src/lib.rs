pub mod config;
pub mod entry;
pub mod error;
pub mod io;
pub mod log_store;
pub mod metrics;
pub mod paths;
pub mod suggest;
pub mod ticket;

pub use error::{AssistError, Result};
