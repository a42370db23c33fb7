/// Simplified error system - no over-engineering!
///
/// Every failure in the fetch-and-render cycle collapses into one of three
/// buckets, all logged and swallowed at the top of the cycle.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Transport failure or non-2xx HTTP status.
    Network(String),
    /// Malformed response body or unparseable record field.
    Decode(String),
    /// Canvas access or draw failure.
    Render(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode Error: {}", msg),
            AppError::Render(msg) => write!(f, "Render Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
