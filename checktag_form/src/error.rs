use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid form description: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown scope: {0}")]
    UnknownScope(String),

    #[error("duplicate field {field} in scope {scope}")]
    DuplicateField { scope: String, field: String },
}
