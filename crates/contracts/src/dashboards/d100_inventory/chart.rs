//! Chart-ready projections of a [`MetricsSnapshot`](super::MetricsSnapshot).
//!
//! Every chart is a label axis plus one or more named series aligned with it.
//! Bar and line charts are built by the same routine from a declarative list
//! of [`SeriesDescriptor`]s; the pie chart reuses it with a per-slice palette.
//! Nothing here normalizes, sorts, pads or truncates values.

use serde::{Deserialize, Serialize};

use super::dto::{Devices, Payments, SalesAndPurchases};
use super::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// A single colour for the whole series, or one colour per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: ColorSpec,
}

/// What the chart renderer receives: `series[k].values[i]` belongs to
/// `labels[i]` for every `k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesBundle {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Static colour settings of one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub background: Option<&'static str>,
    pub border: Option<&'static str>,
    pub fill: bool,
}

impl Paint {
    pub const fn filled(background: &'static str, border: &'static str) -> Self {
        Self {
            background: Some(background),
            border: Some(border),
            fill: true,
        }
    }

    pub const fn outline(border: &'static str) -> Self {
        Self {
            background: None,
            border: Some(border),
            fill: false,
        }
    }

    fn to_color_spec(self) -> ColorSpec {
        ColorSpec {
            background_color: self.background.map(|c| ColorValue::Single(c.to_string())),
            border_color: self.border.map(str::to_string),
            fill: self.fill,
        }
    }
}

/// A source group that owns one label axis.
pub trait LabelAxis {
    /// Name used in error messages, matches the snapshot field.
    const GROUP: &'static str;

    fn labels(&self) -> &[String];
}

impl LabelAxis for SalesAndPurchases {
    const GROUP: &'static str = "salesAndPurchases";

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl LabelAxis for Payments {
    const GROUP: &'static str = "payments";

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl LabelAxis for Devices {
    const GROUP: &'static str = "devices";

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Which values to take from the source, what to call them and how to paint
/// them.
pub struct SeriesDescriptor<S> {
    pub display_name: &'static str,
    pub source: fn(&S) -> &[f64],
    pub paint: Paint,
}

fn sales_target(s: &SalesAndPurchases) -> &[f64] {
    &s.sales_target
}

fn sales(s: &SalesAndPurchases) -> &[f64] {
    &s.sales
}

fn purchases(s: &SalesAndPurchases) -> &[f64] {
    &s.purchases
}

fn payment_sent(p: &Payments) -> &[f64] {
    &p.payment_sent
}

fn payment_received(p: &Payments) -> &[f64] {
    &p.payment_received
}

fn device_weights(d: &Devices) -> &[f64] {
    &d.data
}

pub const SALES_AND_PURCHASES_SERIES: [SeriesDescriptor<SalesAndPurchases>; 3] = [
    SeriesDescriptor {
        display_name: "Sales Target",
        source: sales_target,
        paint: Paint::filled("rgba(153, 102, 255, 0.5)", "rgba(153, 102, 255, 1)"),
    },
    SeriesDescriptor {
        display_name: "Sales",
        source: sales,
        paint: Paint::filled("rgba(75, 192, 192, 0.5)", "rgba(75, 192, 192, 1)"),
    },
    SeriesDescriptor {
        display_name: "Purchases",
        source: purchases,
        paint: Paint::filled("rgba(255, 99, 132, 0.5)", "rgba(255, 99, 132, 1)"),
    },
];

pub const PAYMENT_SERIES: [SeriesDescriptor<Payments>; 2] = [
    SeriesDescriptor {
        display_name: "Payment Sent",
        source: payment_sent,
        paint: Paint::outline("rgba(255, 99, 132, 1)"),
    },
    SeriesDescriptor {
        display_name: "Payment Received",
        source: payment_received,
        paint: Paint::outline("rgba(54, 162, 235, 1)"),
    },
];

const DEVICE_SERIES: [SeriesDescriptor<Devices>; 1] = [SeriesDescriptor {
    display_name: "Devices",
    source: device_weights,
    paint: Paint {
        background: None,
        border: None,
        fill: true,
    },
}];

/// Slice colours, cycled when there are more slices than entries.
pub const PIE_PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#FF9F40"];

/// Projects `source` into a bundle with one series per descriptor, in
/// descriptor order.
///
/// Fails with [`DashboardError::ShapeMismatch`] on the first series whose
/// length differs from the label axis.
pub fn build_series_bundle<S: LabelAxis>(
    kind: ChartKind,
    source: &S,
    descriptors: &[SeriesDescriptor<S>],
) -> Result<ChartSeriesBundle, DashboardError> {
    let labels = source.labels();
    let mut series = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let values = (descriptor.source)(source);
        if values.len() != labels.len() {
            return Err(DashboardError::ShapeMismatch {
                group: S::GROUP,
                series: descriptor.display_name.to_string(),
                expected: labels.len(),
                actual: values.len(),
            });
        }
        series.push(ChartSeries {
            name: descriptor.display_name.to_string(),
            values: values.to_vec(),
            color: descriptor.paint.to_color_spec(),
        });
    }

    Ok(ChartSeriesBundle {
        kind,
        labels: labels.to_vec(),
        series,
    })
}

/// Sales Target / Sales / Purchases per period.
pub fn build_bar_series(source: &SalesAndPurchases) -> Result<ChartSeriesBundle, DashboardError> {
    build_series_bundle(ChartKind::Bar, source, &SALES_AND_PURCHASES_SERIES)
}

/// Payment Sent / Payment Received per day.
pub fn build_line_series(source: &Payments) -> Result<ChartSeriesBundle, DashboardError> {
    build_series_bundle(ChartKind::Line, source, &PAYMENT_SERIES)
}

/// Device mix; each slice weighs its raw value.
pub fn build_pie_series(source: &Devices) -> Result<ChartSeriesBundle, DashboardError> {
    let mut bundle = build_series_bundle(ChartKind::Pie, source, &DEVICE_SERIES)?;
    let slice_colors = PIE_PALETTE
        .iter()
        .cycle()
        .take(bundle.labels.len())
        .map(|c| c.to_string())
        .collect();
    if let Some(series) = bundle.series.first_mut() {
        series.color.background_color = Some(ColorValue::PerPoint(slice_colors));
    }
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_inventory::dto::fixtures::sample_snapshot;

    #[test]
    fn test_bar_series_keeps_labels_and_values_in_order() {
        let snapshot = sample_snapshot();
        let bundle = build_bar_series(&snapshot.sales_and_purchases).unwrap();

        assert_eq!(bundle.kind, ChartKind::Bar);
        assert_eq!(bundle.labels, vec!["Feb", "Mar", "Apr", "May", "Jun", "Jul"]);
        assert_eq!(bundle.series.len(), 3);

        let names: Vec<&str> = bundle.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Sales Target", "Sales", "Purchases"]);

        let sp = &snapshot.sales_and_purchases;
        assert_eq!(bundle.series[0].values, sp.sales_target);
        assert_eq!(bundle.series[1].values, sp.sales);
        assert_eq!(bundle.series[2].values, sp.purchases);
        for series in &bundle.series {
            assert_eq!(series.values.len(), 6);
            assert!(series.color.fill);
        }
    }

    #[test]
    fn test_bar_series_colors() {
        let bundle = build_bar_series(&sample_snapshot().sales_and_purchases).unwrap();

        assert_eq!(
            bundle.series[1].color,
            ColorSpec {
                background_color: Some(ColorValue::Single("rgba(75, 192, 192, 0.5)".into())),
                border_color: Some("rgba(75, 192, 192, 1)".into()),
                fill: true,
            }
        );
    }

    #[test]
    fn test_bar_series_rejects_short_series() {
        let mut snapshot = sample_snapshot();
        snapshot.sales_and_purchases.sales.truncate(4);

        let err = build_bar_series(&snapshot.sales_and_purchases).unwrap_err();
        assert_eq!(
            err,
            DashboardError::ShapeMismatch {
                group: "salesAndPurchases",
                series: "Sales".into(),
                expected: 6,
                actual: 4,
            }
        );
    }

    #[test]
    fn test_bar_series_rejects_extra_labels() {
        let mut snapshot = sample_snapshot();
        snapshot.sales_and_purchases.labels.push("Aug".into());

        // First descriptor already disagrees with the axis
        assert!(matches!(
            build_bar_series(&snapshot.sales_and_purchases),
            Err(DashboardError::ShapeMismatch { expected: 7, actual: 6, .. })
        ));
    }

    #[test]
    fn test_line_series_is_unfilled_outline() {
        let snapshot = sample_snapshot();
        let bundle = build_line_series(&snapshot.payments).unwrap();

        assert_eq!(bundle.kind, ChartKind::Line);
        assert_eq!(bundle.labels, snapshot.payments.labels);
        assert_eq!(bundle.series.len(), 2);
        assert_eq!(bundle.series[0].name, "Payment Sent");
        assert_eq!(bundle.series[0].values, snapshot.payments.payment_sent);
        assert_eq!(bundle.series[1].name, "Payment Received");
        assert_eq!(bundle.series[1].values, snapshot.payments.payment_received);
        for series in &bundle.series {
            assert!(!series.color.fill);
            assert!(series.color.background_color.is_none());
        }
    }

    #[test]
    fn test_line_series_rejects_mismatch() {
        let mut snapshot = sample_snapshot();
        snapshot.payments.payment_received.push(4000.0);

        assert!(matches!(
            build_line_series(&snapshot.payments),
            Err(DashboardError::ShapeMismatch { group: "payments", .. })
        ));
    }

    #[test]
    fn test_pie_series_uses_raw_weights() {
        let devices = Devices {
            labels: ["iOS", "MacBook", "Smart TV", "Tesla Model S", "Google Pixel"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data: vec![40.0, 30.0, 12.0, 8.0, 10.0],
        };

        let bundle = build_pie_series(&devices).unwrap();

        assert_eq!(bundle.kind, ChartKind::Pie);
        assert_eq!(bundle.labels.len(), 5);
        assert_eq!(bundle.series.len(), 1);
        assert_eq!(bundle.series[0].values, vec![40.0, 30.0, 12.0, 8.0, 10.0]);
        assert_eq!(
            bundle.series[0].color.background_color,
            Some(ColorValue::PerPoint(
                PIE_PALETTE.iter().map(|c| c.to_string()).collect()
            ))
        );
    }

    #[test]
    fn test_pie_palette_cycles_past_five_slices() {
        let devices = Devices {
            labels: (1..=7).map(|i| format!("d{}", i)).collect(),
            data: vec![1.0; 7],
        };

        let bundle = build_pie_series(&devices).unwrap();
        match &bundle.series[0].color.background_color {
            Some(ColorValue::PerPoint(colors)) => {
                assert_eq!(colors.len(), 7);
                assert_eq!(colors[5], PIE_PALETTE[0]);
                assert_eq!(colors[6], PIE_PALETTE[1]);
            }
            other => panic!("expected per-slice colours, got {:?}", other),
        }
    }

    #[test]
    fn test_pie_series_rejects_mismatch() {
        let devices = Devices {
            labels: vec!["iOS".into(), "MacBook".into()],
            data: vec![40.0],
        };

        assert_eq!(
            build_pie_series(&devices),
            Err(DashboardError::ShapeMismatch {
                group: "devices",
                series: "Devices".into(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_empty_axis_builds_empty_series() {
        let payments = Payments {
            labels: vec![],
            payment_sent: vec![],
            payment_received: vec![],
        };

        let bundle = build_line_series(&payments).unwrap();
        assert!(bundle.labels.is_empty());
        assert_eq!(bundle.series.len(), 2);
        assert!(bundle.series.iter().all(|s| s.values.is_empty()));
    }

    #[test]
    fn test_bundle_json_shape() {
        let bundle = build_line_series(&sample_snapshot().payments).unwrap();
        let json = serde_json::to_value(&bundle).unwrap();

        assert_eq!(json["kind"], "line");
        assert_eq!(json["series"][0]["color"]["borderColor"], "rgba(255, 99, 132, 1)");
        assert_eq!(json["series"][0]["color"]["fill"], false);
        assert!(json["series"][0]["color"].get("backgroundColor").is_none());
    }
}
