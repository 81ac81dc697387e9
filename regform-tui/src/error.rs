//! Front-end error types

/// Errors surfaced by the terminal front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal setup, drawing, or event polling failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
