//! D100 Inventory dashboard: metrics snapshot and its chart-ready projections.
//!
//! ```text
//! MetricsSnapshot ──► chart::build_*      ──► ChartSeriesBundle (bar / line / pie)
//!                 └─► status::classify    ──► StyleCategory per invoice row
//!                 └─► view::InventoryDashboardView (everything the page renders)
//! ```

pub mod chart;
pub mod dto;
pub mod error;
pub mod status;
pub mod view;

pub use chart::{ChartKind, ChartSeries, ChartSeriesBundle, ColorSpec, ColorValue};
pub use dto::{
    Devices, Invoice, MetricsSnapshot, Payments, SalesAndPurchases, StockAlertItem, StockHistory,
};
pub use error::DashboardError;
pub use status::{classify_status, InvoiceStatus, StyleCategory};
pub use view::{CounterRow, InventoryDashboardView, InvoiceRow, KpiCard, Tone};
