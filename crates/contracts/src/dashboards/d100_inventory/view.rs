//! Everything the inventory dashboard page renders, derived from one
//! snapshot in a single pass.

use super::chart::{build_bar_series, build_line_series, build_pie_series, ChartSeriesBundle};
use super::dto::{MetricsSnapshot, StockAlertItem};
use super::error::DashboardError;
use super::status::{InvoiceStatus, StyleCategory};

/// Colour accent of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Info,
    Caution,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Info => "info",
            Tone::Caution => "caution",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    /// Localization key of the caption
    pub title_key: &'static str,
    pub amount: f64,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterRow {
    /// Localization key of the caption
    pub label_key: &'static str,
    pub value: u32,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    pub id: String,
    pub customer: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub style: StyleCategory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDashboardView {
    pub overview: [KpiCard; 4],
    pub sales_and_purchases: ChartSeriesBundle,
    pub payments: ChartSeriesBundle,
    pub devices: ChartSeriesBundle,
    pub stock_history: [CounterRow; 4],
    pub stock_alert: Vec<StockAlertItem>,
    pub recent_invoices: Vec<InvoiceRow>,
}

impl InventoryDashboardView {
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Result<Self, DashboardError> {
        let overview = [
            KpiCard {
                title_key: "total_sales",
                amount: snapshot.total_sales,
                tone: Tone::Positive,
            },
            KpiCard {
                title_key: "total_expense",
                amount: snapshot.total_expense,
                tone: Tone::Negative,
            },
            KpiCard {
                title_key: "payment_sent",
                amount: snapshot.payment_sent,
                tone: Tone::Info,
            },
            KpiCard {
                title_key: "payment_received",
                amount: snapshot.payment_received,
                tone: Tone::Caution,
            },
        ];

        let history = snapshot.stock_history;
        let stock_history = [
            CounterRow {
                label_key: "total_sales_items",
                value: history.total_sales,
                tone: Tone::Positive,
            },
            CounterRow {
                label_key: "total_sales_return_items",
                value: history.total_returns,
                tone: Tone::Negative,
            },
            CounterRow {
                label_key: "total_purchase_items",
                value: history.total_purchases,
                tone: Tone::Info,
            },
            CounterRow {
                label_key: "purchase_returns_items",
                value: history.purchase_returns,
                tone: Tone::Caution,
            },
        ];

        let recent_invoices = snapshot
            .recent_invoices
            .iter()
            .map(|invoice| InvoiceRow {
                id: invoice.id.clone(),
                customer: invoice.customer.clone(),
                amount: invoice.amount,
                status: invoice.status,
                style: invoice.status.classify(),
            })
            .collect();

        Ok(Self {
            overview,
            sales_and_purchases: build_bar_series(&snapshot.sales_and_purchases)?,
            payments: build_line_series(&snapshot.payments)?,
            devices: build_pie_series(&snapshot.devices)?,
            stock_history,
            stock_alert: snapshot.stock_alert.clone(),
            recent_invoices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_inventory::chart::ChartKind;
    use crate::dashboards::d100_inventory::dto::fixtures::sample_snapshot;

    #[test]
    fn test_overview_cards_follow_snapshot_totals() {
        let view = InventoryDashboardView::from_snapshot(&sample_snapshot()).unwrap();

        let cards: Vec<(&str, f64, Tone)> = view
            .overview
            .iter()
            .map(|c| (c.title_key, c.amount, c.tone))
            .collect();
        assert_eq!(
            cards,
            vec![
                ("total_sales", 12345.0, Tone::Positive),
                ("total_expense", 3213.0, Tone::Negative),
                ("payment_sent", 65920.0, Tone::Info),
                ("payment_received", 72840.0, Tone::Caution),
            ]
        );
    }

    #[test]
    fn test_charts_are_built_from_their_groups() {
        let view = InventoryDashboardView::from_snapshot(&sample_snapshot()).unwrap();

        assert_eq!(view.sales_and_purchases.kind, ChartKind::Bar);
        assert_eq!(view.payments.kind, ChartKind::Line);
        assert_eq!(view.devices.kind, ChartKind::Pie);
        assert_eq!(view.devices.series[0].values, vec![40.0, 30.0, 12.0, 8.0, 10.0]);
    }

    #[test]
    fn test_stock_history_is_bound_to_snapshot_counters() {
        let view = InventoryDashboardView::from_snapshot(&sample_snapshot()).unwrap();

        let values: Vec<u32> = view.stock_history.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![210, 2, 500, 5]);
        assert_eq!(view.stock_history[3].label_key, "purchase_returns_items");
    }

    #[test]
    fn test_invoice_rows_carry_style_category() {
        let view = InventoryDashboardView::from_snapshot(&sample_snapshot()).unwrap();

        let rows: Vec<(&str, StyleCategory)> = view
            .recent_invoices
            .iter()
            .map(|r| (r.id.as_str(), r.style))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("INV9783411", StyleCategory::Success),
                ("INV9783412", StyleCategory::Warning),
                ("INV9783413", StyleCategory::Danger),
            ]
        );
    }

    #[test]
    fn test_stock_alert_keeps_snapshot_order() {
        let snapshot = sample_snapshot();
        let view = InventoryDashboardView::from_snapshot(&snapshot).unwrap();

        assert_eq!(view.stock_alert, snapshot.stock_alert);
    }

    #[test]
    fn test_shape_error_fails_the_whole_view() {
        let mut snapshot = sample_snapshot();
        snapshot.devices.labels.pop();

        assert!(matches!(
            InventoryDashboardView::from_snapshot(&snapshot),
            Err(DashboardError::ShapeMismatch { group: "devices", .. })
        ));
    }
}
