//! Error type shared by the engine and the comparator

/// The only way a projection can fail: the caller handed us a bad record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("invalid input {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
