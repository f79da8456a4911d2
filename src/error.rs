use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    InvalidArgument(String),
    UsernameNotFound(String),
    UsernameAlreadyExists(String),
    ContentNotFound(String),
    NoUsers(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PlatformError::UsernameNotFound(msg) => write!(f, "Username not found: {}", msg),
            PlatformError::UsernameAlreadyExists(msg) => {
                write!(f, "Username already exists: {}", msg)
            }
            PlatformError::ContentNotFound(msg) => write!(f, "Content not found: {}", msg),
            PlatformError::NoUsers(msg) => write!(f, "No users: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

pub type PlatformResult<T> = Result<T, PlatformError>;
