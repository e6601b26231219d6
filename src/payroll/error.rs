use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PayrollError {
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, PayrollError::InvalidValue(_))
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, PayrollError::AccessDenied(_))
    }
}

pub type Result<T> = std::result::Result<T, PayrollError>;
