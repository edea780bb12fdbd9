//! Error types for the pattern mining engine

use std::fmt;

/// Errors that can occur during corpus analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// MIDI decoding error
    DecodingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
