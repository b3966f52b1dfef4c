//! Error types for type-name parsing

use crate::lexer::TokenSpan;
use thiserror::Error;

/// Result type for type-name operations
pub type TypeNameResult<T> = Result<T, TypeNameError>;

/// Parse error with location and context
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeNameError {
    #[error("Unexpected token at {span:?}: expected {expected}, found {found}")]
    UnexpectedToken {
        span: TokenSpan,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Lexer error at {span:?}: {message}")]
    LexError { span: TokenSpan, message: String },
}

impl TypeNameError {
    pub fn span(&self) -> Option<TokenSpan> {
        match self {
            TypeNameError::UnexpectedToken { span, .. } => Some(*span),
            TypeNameError::UnexpectedEof { .. } => None,
            TypeNameError::LexError { span, .. } => Some(*span),
        }
    }
}
