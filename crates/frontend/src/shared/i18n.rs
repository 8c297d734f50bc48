//! Localized UI text - single source of truth for captions.
//!
//! Unknown keys fall back to the key itself so a missing entry is visible
//! on screen rather than rendered blank.

/// Returns the display text for `key`.
pub fn t(key: &'static str) -> &'static str {
    match key {
        // ── Shell ─────────────────────────────────────────────────────────
        "app_title" => "Kaveri International ERP",
        "back" => "Back",
        "loading" => "Loading...",
        "logout" => "Log out",

        // ── Login ─────────────────────────────────────────────────────────
        "login" => "Login",
        "username" => "Username",
        "password" => "Password",
        "signing_in" => "Signing in...",
        "invalid_credentials" => "Invalid username or password",
        "login_unavailable" => "Login service is unavailable, please try again",

        // ── Pages ─────────────────────────────────────────────────────────
        "home" => "Home",
        "suppliers" => "Suppliers",
        "products" => "Products",
        "customers" => "Customers",
        "orders" => "Orders",
        "sales" => "Sales",
        "stats" => "Statistics",
        "inventory_dashboard" => "Inventory Dashboard",
        "section_placeholder" => "This section has no content yet.",

        // ── Inventory dashboard ───────────────────────────────────────────
        "total_sales" => "Total Sales",
        "total_expense" => "Total Expense",
        "payment_sent" => "Payment Sent",
        "payment_received" => "Payment Received",
        "sales_and_purchases" => "Sales & Purchases",
        "payments" => "Payments",
        "devices" => "Devices",
        "stock_history" => "Stock History (7 Days)",
        "total_sales_items" => "Total Sales Items",
        "total_sales_return_items" => "Total Sales Return Items",
        "total_purchase_items" => "Total Purchase Items",
        "purchase_returns_items" => "Purchase Returns Items",
        "stock_alert" => "Stock Alert",
        "recent_invoices" => "Recent Invoices",
        "invoice_id" => "Invoice ID",
        "customer" => "Customer",
        "amount" => "Amount",
        "status" => "Status",
        "dashboard_error" => "Dashboard data could not be loaded",

        other => other,
    }
}
