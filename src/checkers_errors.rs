use std::error::Error;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------
#[derive(Debug, Clone)]
pub struct CheckersError(String);

pub type CheckersResult<T> = std::result::Result<T, CheckersError>;

impl From<String> for CheckersError {
    fn from(s: String) -> CheckersError {
        CheckersError(s)
    }
}

impl From<&str> for CheckersError {
    fn from(s: &str) -> CheckersError {
        CheckersError(s.to_string())
    }
}

impl Error for CheckersError {}

impl fmt::Display for CheckersError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Checkers Error occured: {}", self.0)
    }
}
