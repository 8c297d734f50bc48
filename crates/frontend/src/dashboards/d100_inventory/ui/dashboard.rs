use contracts::dashboards::d100_inventory::{InventoryDashboardView, InvoiceRow, KpiCard};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::chart::ChartCanvas;
use crate::dashboards::d100_inventory::api;
use crate::shared::i18n::t;
use crate::shared::number_format::{format_count, format_currency};
use crate::system::auth::api::UNAUTHORIZED;
use crate::system::auth::context::use_session;

/// Inventory dashboard. The snapshot is fetched once per activation and
/// every view-model is derived from it in one pass.
#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let session = use_session();

    let (dashboard, set_dashboard) = signal(None::<InventoryDashboardView>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let Some(token) = session.token_untracked() else {
            return;
        };

        spawn_local(async move {
            match api::get_inventory_snapshot(&token).await {
                Ok(snapshot) => match InventoryDashboardView::from_snapshot(&snapshot) {
                    Ok(view) => set_dashboard.set(Some(view)),
                    Err(err) => {
                        log::error!("Inventory snapshot rejected: {}", err);
                        set_error.set(Some(err.to_string()));
                    }
                },
                Err(err) if err == UNAUTHORIZED => {
                    log::warn!("Session rejected while loading inventory snapshot");
                    session.clear();
                }
                Err(err) => {
                    log::error!("Failed to load inventory snapshot: {}", err);
                    set_error.set(Some(err));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div id="d100_inventory--dashboard" class="page d100-dashboard">
            <h1>{t("inventory_dashboard")}</h1>

            {move || {
                if loading.get() {
                    view! {
                        <div class="d100-loading">
                            <span>{t("loading")}</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="d100-error">
                            <strong>{t("dashboard_error")}": "</strong>
                            {err}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || dashboard.get().map(render_dashboard)}
        </div>
    }
}

fn render_dashboard(view_model: InventoryDashboardView) -> impl IntoView {
    let InventoryDashboardView {
        overview,
        sales_and_purchases,
        payments,
        devices,
        stock_history,
        stock_alert,
        recent_invoices,
    } = view_model;

    view! {
        <section class="d100-overview">
            {overview.into_iter().map(kpi_card).collect_view()}
        </section>

        <section class="d100-row">
            <div class="card card--wide">
                <h3>{t("sales_and_purchases")}</h3>
                <ChartCanvas bundle=sales_and_purchases />
            </div>
            <div class="card">
                <h3>{t("devices")}</h3>
                <ChartCanvas bundle=devices />
            </div>
        </section>

        <section class="d100-row">
            <div class="card card--wide">
                <h3>{t("payments")}</h3>
                <ChartCanvas bundle=payments height=250 />
            </div>
            <div class="card">
                <h3>{t("stock_history")}</h3>
                <ul class="counter-list">
                    {stock_history
                        .into_iter()
                        .map(|row| {
                            view! {
                                <li class=format!("counter counter--{}", row.tone.as_str())>
                                    <span class="counter__label">{t(row.label_key)}</span>
                                    <span class="counter__value">{format_count(row.value)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>

        <section class="d100-row">
            <div class="card">
                <h3>{t("stock_alert")}</h3>
                <ul class="stock-alert">
                    {stock_alert
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <span>{item.product}</span>
                                    <span class="stock-alert__qty">{format_count(item.quantity)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="card card--wide">
                <h3>{t("recent_invoices")}</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{t("invoice_id")}</th>
                            <th>{t("customer")}</th>
                            <th class="numeric">{t("amount")}</th>
                            <th>{t("status")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {recent_invoices.into_iter().map(invoice_row).collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

fn kpi_card(card: KpiCard) -> impl IntoView {
    view! {
        <div class=format!("kpi-card kpi-card--{}", card.tone.as_str())>
            <span class="kpi-card__title">{t(card.title_key)}</span>
            <span class="kpi-card__amount">{format_currency(card.amount)}</span>
        </div>
    }
}

fn invoice_row(row: InvoiceRow) -> impl IntoView {
    view! {
        <tr>
            <td>{row.id}</td>
            <td>{row.customer}</td>
            <td class="numeric">{format_currency(row.amount)}</td>
            <td>
                <span class=format!("badge badge--{}", row.style.as_str())>
                    {row.status.as_str()}
                </span>
            </td>
        </tr>
    }
}
