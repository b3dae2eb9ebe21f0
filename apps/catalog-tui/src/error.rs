//! Errors raised by the catalog TUI itself

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal setup, drawing or input failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The log destination could not be opened
    #[error("Failed to open log file {path}: {message}")]
    LogFile { path: String, message: String },
}
