pub type RespackResult<T> = Result<T, RespackError>;

#[derive(thiserror::Error, Debug)]
pub enum RespackError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unsupported conversion: {0}")]
    Unsupported(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RespackError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            RespackError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            RespackError::not_found("x")
                .to_string()
                .contains("resource not found:")
        );
        assert!(
            RespackError::unsupported("x")
                .to_string()
                .contains("unsupported conversion:")
        );
        assert!(
            RespackError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = RespackError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
