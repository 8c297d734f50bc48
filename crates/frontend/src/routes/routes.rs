use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use super::navigation::{shows_back_for, HOME_PATH, LOGIN_PATH};
use crate::dashboards::InventoryDashboard;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireSession;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::section::SectionPage;

/// Back control that steps one entry back in the browser history.
#[component]
fn BackButton() -> impl IntoView {
    let on_click = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    };

    view! {
        <button class="back-button" on:click=on_click>
            {icon("back")}
            <span>{t("back")}</span>
        </button>
    }
}

/// Shows the back control when the current route is flagged for it.
#[component]
fn ConditionalBackButton() -> impl IntoView {
    let location = use_location();
    let visible = Memo::new(move |_| location.pathname.with(|path| shows_back_for(path)));

    view! {
        <Show when=move || visible.get()>
            <BackButton />
        </Show>
    }
}

#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireSession>
            <ConditionalBackButton />
            {children()}
        </RequireSession>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=LOGIN_PATH /> } />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/home") view=|| view! { <Protected><HomePage /></Protected> } />
                    <Route path=path!("/suppliers") view=|| section("/suppliers") />
                    <Route path=path!("/products") view=|| section("/products") />
                    <Route path=path!("/customers") view=|| section("/customers") />
                    <Route path=path!("/orders") view=|| section("/orders") />
                    <Route path=path!("/sales") view=|| section("/sales") />
                    <Route path=path!("/stats") view=|| section("/stats") />
                    <Route
                        path=path!("/inventory-dashboard")
                        view=|| view! { <Protected><InventoryDashboard /></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

fn section(path: &'static str) -> impl IntoView {
    view! {
        <Protected>
            <SectionPage path=path />
        </Protected>
    }
}
