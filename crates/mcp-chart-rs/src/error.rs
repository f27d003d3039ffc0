use thiserror::Error as ThisError;

/// Structural failures that make a whole chart meaningless.
///
/// Bad individual values never surface here; they degrade to `0.0` instead.
#[derive(ThisError, Debug)]
pub enum ChartError {
    #[error("{field} must be valid JSON: {source}")]
    InvalidJson {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} must be a JSON array of objects")]
    UnexpectedShape { field: &'static str },

    #[error("csv_data could not be parsed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV must have at least a header row and one data row")]
    InsufficientRows,

    #[error("CSV must contain at least one numeric column for chart values")]
    NoNumericColumn,

    #[error("JSON objects must contain at least one numeric field for chart values")]
    NoNumericField,

    #[error("json_data must be a non-empty JSON array")]
    EmptyRecords,
}

pub type Result<T> = core::result::Result<T, ChartError>;

impl From<ChartError> for mcp_error_rs::Error {
    fn from(err: ChartError) -> Self {
        mcp_error_rs::Error::InvalidParameters(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_condition() {
        assert!(ChartError::InsufficientRows.to_string().contains("at least a header"));
        assert!(ChartError::NoNumericColumn.to_string().contains("numeric column"));
        assert!(ChartError::NoNumericField.to_string().contains("numeric field"));
        assert!(ChartError::EmptyRecords.to_string().contains("non-empty"));
        assert!(
            ChartError::UnexpectedShape { field: "datasets" }
                .to_string()
                .contains("JSON array")
        );
    }

    #[test]
    fn test_maps_to_invalid_parameters() {
        let err: mcp_error_rs::Error = ChartError::EmptyRecords.into();
        assert!(matches!(
            err,
            mcp_error_rs::Error::InvalidParameters(ref msg) if msg.contains("non-empty")
        ));
    }
}
