use serde_json::Value;
use thiserror::Error;

/// Errors emitted while generating a value from a schema.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unsupported type: {type_value}")]
    UnsupportedType { type_value: Value },
    #[error("unsupported schema: {reason}")]
    UnsupportedSchema { schema: Value, reason: String },
    #[error("invalid schema: {reason}")]
    InvalidSchema { schema: Value, reason: String },
    #[error("unique items exhausted: generated {generated} of {requested} requested items")]
    UniqueItemsExhausted { requested: usize, generated: usize },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerationError {
    pub(crate) fn unsupported(schema: &Value, reason: impl Into<String>) -> Self {
        Self::UnsupportedSchema {
            schema: schema.clone(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(schema: &Value, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            schema: schema.clone(),
            reason: reason.into(),
        }
    }

    /// Stable name of the error variant, used when tallying failures.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::UnsupportedType { .. } => "UnsupportedType",
            GenerationError::UnsupportedSchema { .. } => "UnsupportedSchema",
            GenerationError::InvalidSchema { .. } => "InvalidSchema",
            GenerationError::UniqueItemsExhausted { .. } => "UniqueItemsExhausted",
            GenerationError::Json(_) => "Json",
        }
    }

    /// Human-readable reason for schema-level failures.
    pub fn reason(&self) -> Option<&str> {
        match self {
            GenerationError::UnsupportedSchema { reason, .. }
            | GenerationError::InvalidSchema { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Schema node that triggered the failure, when one is attached.
    pub fn schema(&self) -> Option<&Value> {
        match self {
            GenerationError::UnsupportedSchema { schema, .. }
            | GenerationError::InvalidSchema { schema, .. } => Some(schema),
            _ => None,
        }
    }
}

/// Convenience alias for generation results.
pub type Result<T> = std::result::Result<T, GenerationError>;
