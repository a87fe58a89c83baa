use thiserror::Error;

/// Configuration errors raised while building the route table.
///
/// These are startup defects: the table is fixed at compile time, so any
/// of them means the declared routes are wrong, not the user's URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("Route table has no routes")]
    EmptyTable,

    #[error("Invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Fallback route declared more than once")]
    DuplicateFallback,

    #[error("Unknown route name: {0}")]
    UnknownRouteName(String),

    #[error("Route '{name}' needs parameters to build a path: {path}")]
    ParameterizedPath { name: String, path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Route table error: {0}")]
    RouteTable(#[from] RouteTableError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
