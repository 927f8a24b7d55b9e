/// Convenience result type used across orbit-gif.
pub type OrbitResult<T> = Result<T, OrbitError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum OrbitError {
    /// Invalid configuration or a stage invoked outside its preconditions.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source bitmap could not be read or decoded, or the output could not be created.
    #[error("io error: {0}")]
    Io(String),

    /// The encoder was handed an empty frame list.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Serializing the animation failed.
    #[error("encode error: {0}")]
    Encode(String),
}

impl OrbitError {
    /// Build an [`OrbitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OrbitError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build an [`OrbitError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build an [`OrbitError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
