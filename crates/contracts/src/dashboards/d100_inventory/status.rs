use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::DashboardError;

/// Delivery state of an invoice. The set is closed: anything else is a
/// data-integrity error, not a fourth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InvoiceStatus {
    Delivered,
    InProgress,
    Returned,
}

/// Presentation class of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    Success,
    Warning,
    Danger,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Delivered,
        InvoiceStatus::InProgress,
        InvoiceStatus::Returned,
    ];

    /// Display text, also the wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Delivered => "Delivered",
            InvoiceStatus::InProgress => "In Progress",
            InvoiceStatus::Returned => "Returned",
        }
    }

    pub fn classify(self) -> StyleCategory {
        match self {
            InvoiceStatus::Delivered => StyleCategory::Success,
            InvoiceStatus::InProgress => StyleCategory::Warning,
            InvoiceStatus::Returned => StyleCategory::Danger,
        }
    }
}

impl StyleCategory {
    /// Suffix of the badge class, e.g. `badge--success`.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleCategory::Success => "success",
            StyleCategory::Warning => "warning",
            StyleCategory::Danger => "danger",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvoiceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for InvoiceStatus {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Classifies a raw status string, failing on anything outside the known set.
pub fn classify_status(raw: &str) -> Result<StyleCategory, DashboardError> {
    raw.parse::<InvoiceStatus>().map(InvoiceStatus::classify)
}
