use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Tool {0} not found")]
    ToolNotFound(String),
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_message() {
        let err = Error::InvalidParameters("datasets must be valid JSON".into());
        assert_eq!(
            err.to_string(),
            "invalid parameters: datasets must be valid JSON"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
