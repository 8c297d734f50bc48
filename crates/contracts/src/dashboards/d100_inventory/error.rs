use thiserror::Error;

/// Data-integrity failures of the inventory dashboard.
///
/// These are never coerced to a default: a snapshot that trips one of them
/// is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("shape mismatch in {group}: series '{series}' has {actual} values for {expected} labels")]
    ShapeMismatch {
        group: &'static str,
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("unknown invoice status: '{0}'")]
    UnknownStatus(String),

    /// Negative, NaN or infinite figure
    #[error("{field} must be a finite non-negative number, got {value}")]
    InvalidAmount { field: String, value: f64 },

    #[error("duplicate invoice id: '{0}'")]
    DuplicateInvoiceId(String),
}
