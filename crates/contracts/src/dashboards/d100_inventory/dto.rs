use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::DashboardError;
use super::status::InvoiceStatus;

/// One immutable capture of business metrics, taken when the dashboard is
/// activated.
///
/// Field names follow the JSON the dashboard endpoint serves (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_sales: f64,
    pub total_expense: f64,
    pub payment_sent: f64,
    pub payment_received: f64,
    pub sales_and_purchases: SalesAndPurchases,
    pub devices: Devices,
    pub recent_invoices: Vec<Invoice>,
    pub stock_history: StockHistory,
    pub stock_alert: Vec<StockAlertItem>,
    pub payments: Payments,
}

/// Period labels with three aligned series: index `i` of every vector is
/// the same period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAndPurchases {
    pub labels: Vec<String>,
    pub sales_target: Vec<f64>,
    pub sales: Vec<f64>,
    pub purchases: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devices {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub customer: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHistory {
    pub total_sales: u32,
    pub total_returns: u32,
    pub total_purchases: u32,
    pub purchase_returns: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAlertItem {
    pub product: String,
    pub quantity: u32,
}

/// Day labels with two aligned payment series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payments {
    pub labels: Vec<String>,
    pub payment_sent: Vec<f64>,
    pub payment_received: Vec<f64>,
}

impl MetricsSnapshot {
    /// Checks every invariant the chart builders and the invoice table rely
    /// on: aligned sequence lengths, finite non-negative amounts and unique
    /// invoice ids.
    ///
    /// Invoice statuses are already closed by the type, an unknown one fails
    /// at deserialization.
    pub fn validate(&self) -> Result<(), DashboardError> {
        for (field, value) in [
            ("totalSales", self.total_sales),
            ("totalExpense", self.total_expense),
            ("paymentSent", self.payment_sent),
            ("paymentReceived", self.payment_received),
        ] {
            ensure_non_negative(field.to_string(), value)?;
        }

        let sp = &self.sales_and_purchases;
        ensure_aligned("salesAndPurchases", &sp.labels, "salesTarget", &sp.sales_target)?;
        ensure_aligned("salesAndPurchases", &sp.labels, "sales", &sp.sales)?;
        ensure_aligned("salesAndPurchases", &sp.labels, "purchases", &sp.purchases)?;
        ensure_all_non_negative("salesAndPurchases.salesTarget", &sp.sales_target)?;
        ensure_all_non_negative("salesAndPurchases.sales", &sp.sales)?;
        ensure_all_non_negative("salesAndPurchases.purchases", &sp.purchases)?;

        ensure_aligned("devices", &self.devices.labels, "data", &self.devices.data)?;
        ensure_all_non_negative("devices.data", &self.devices.data)?;

        let pay = &self.payments;
        ensure_aligned("payments", &pay.labels, "paymentSent", &pay.payment_sent)?;
        ensure_aligned("payments", &pay.labels, "paymentReceived", &pay.payment_received)?;
        ensure_all_non_negative("payments.paymentSent", &pay.payment_sent)?;
        ensure_all_non_negative("payments.paymentReceived", &pay.payment_received)?;

        let mut invoice_ids = HashSet::with_capacity(self.recent_invoices.len());
        for (i, invoice) in self.recent_invoices.iter().enumerate() {
            ensure_non_negative(format!("recentInvoices[{}].amount", i), invoice.amount)?;
            if !invoice_ids.insert(invoice.id.as_str()) {
                return Err(DashboardError::DuplicateInvoiceId(invoice.id.clone()));
            }
        }

        Ok(())
    }
}

fn ensure_aligned(
    group: &'static str,
    labels: &[String],
    series: &str,
    values: &[f64],
) -> Result<(), DashboardError> {
    if labels.len() != values.len() {
        return Err(DashboardError::ShapeMismatch {
            group,
            series: series.to_string(),
            expected: labels.len(),
            actual: values.len(),
        });
    }
    Ok(())
}

fn ensure_all_non_negative(field: &str, values: &[f64]) -> Result<(), DashboardError> {
    for (i, value) in values.iter().enumerate() {
        ensure_non_negative(format!("{}[{}]", field, i), *value)?;
    }
    Ok(())
}

fn ensure_non_negative(field: String, value: f64) -> Result<(), DashboardError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DashboardError::InvalidAmount { field, value });
    }
    Ok(())
}
