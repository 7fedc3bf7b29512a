use thiserror::Error;

/// Custom error type for the neurograph engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroGraphError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
        operation: String,
    },

    #[error("Invalid tensor shape: {reason}")]
    InvalidShape { reason: String },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Operation not implemented: {0}")]
    NotImplemented(String),

    #[error("Unknown tensor id {id}: graph holds {len} nodes")]
    UnknownTensor { id: usize, len: usize },

    #[error("I/O error while rendering: {0}")]
    RenderIo(String),
}
