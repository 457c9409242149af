/// Simplified error system - no over-engineering!
///
/// A poll cycle can fail in exactly one interesting way ("this cycle produced
/// no update"), so transport and decode problems collapse into one small enum
/// that the scheduler logs and swallows.
#[derive(Debug, Clone)]
pub enum AppError {
    NetworkError(String),
    DecodeError(String),
    RenderingError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::DecodeError(msg) => write!(f, "Decode Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
