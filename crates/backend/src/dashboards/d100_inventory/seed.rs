//! Built-in inventory figures, served when no snapshot file is configured.

use contracts::dashboards::d100_inventory::{
    Devices, Invoice, InvoiceStatus, MetricsSnapshot, Payments, SalesAndPurchases,
    StockAlertItem, StockHistory,
};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn invoice(id: &str, customer: &str, amount: f64, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        customer: customer.to_string(),
        amount,
        status,
    }
}

fn alert(product: &str, quantity: u32) -> StockAlertItem {
    StockAlertItem {
        product: product.to_string(),
        quantity,
    }
}

pub fn seed_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        total_sales: 12345.0,
        total_expense: 3213.0,
        payment_sent: 65920.0,
        payment_received: 72840.0,
        sales_and_purchases: SalesAndPurchases {
            labels: labels(&["Feb", "Mar", "Apr", "May", "Jun", "Jul"]),
            sales_target: vec![5000.0, 6000.0, 5500.0, 7000.0, 6500.0, 6000.0],
            sales: vec![4500.0, 7000.0, 6000.0, 4000.0, 3500.0, 5000.0],
            purchases: vec![4000.0, 5000.0, 4500.0, 3000.0, 3500.0, 5000.0],
        },
        devices: Devices {
            labels: labels(&["iOS", "MacBook", "Smart TV", "Tesla Model S", "Google Pixel"]),
            data: vec![40.0, 30.0, 12.0, 8.0, 10.0],
        },
        recent_invoices: vec![
            invoice("INV9783411", "Skylar Price", 354.0, InvoiceStatus::Delivered),
            invoice("INV9783412", "Julian Jenkins", 910.0, InvoiceStatus::InProgress),
            invoice("INV9783413", "Ava Jones", 112.0, InvoiceStatus::Returned),
            invoice("INV9783414", "David Wright", 210.0, InvoiceStatus::Delivered),
            invoice("INV9783415", "Aaron Dunn", 43.0, InvoiceStatus::InProgress),
        ],
        stock_history: StockHistory {
            total_sales: 210,
            total_returns: 2,
            total_purchases: 500,
            purchase_returns: 5,
        },
        stock_alert: vec![
            alert("iPad Pro 2017 Model", 32),
            alert("DJI Mavic Pro 2", 43),
            alert("Tesla Model S", 21),
            alert("Lego StarWar edition", 12),
            alert("Dell Computer Monitor", 16),
            alert("Google Pixel", 8),
            alert("Microsoft Surface", 14),
            alert("Amazon Kindle", 27),
        ],
        payments: Payments {
            labels: (1..=15).map(|day| day.to_string()).collect(),
            payment_sent: vec![
                1000.0, 1500.0, 1200.0, 1700.0, 1600.0, 2000.0, 1800.0, 1900.0, 2100.0, 2300.0,
                2400.0, 2500.0, 2200.0, 2600.0, 2800.0,
            ],
            payment_received: vec![
                1200.0, 1700.0, 1300.0, 1800.0, 2000.0, 2300.0, 2100.0, 2200.0, 2400.0, 2500.0,
                2700.0, 2900.0, 3000.0, 3100.0, 3300.0,
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_snapshot_is_valid() {
        let snapshot = seed_snapshot();
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.payments.labels.len(), 15);
        assert_eq!(snapshot.stock_alert.len(), 8);
        assert_eq!(snapshot.recent_invoices.len(), 5);
    }
}
