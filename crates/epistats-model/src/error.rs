use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The requested value cannot be produced from the current state,
    /// e.g. a map sub-attribute query while no map type is selected.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// A value outside the supported vocabulary was supplied.
    #[error("unsupported {what}: {value}")]
    UnsupportedValue { what: &'static str, value: String },
}

impl ModelError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        ModelError::InvalidState(message.into())
    }

    pub fn unsupported(what: &'static str, value: impl Into<String>) -> Self {
        ModelError::UnsupportedValue {
            what,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
