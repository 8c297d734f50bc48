use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::navigation::{menu_routes, LOGIN_PATH};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let user_name = move || {
        session
            .user()
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.clear();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <div class="page home-page">
            <header class="page-header">
                <h1>{t("app_title")}</h1>
                <div class="page-header__user">
                    <span>{user_name}</span>
                    <button class="btn-secondary" on:click=on_logout>
                        {icon("logout")}
                        <span>{t("logout")}</span>
                    </button>
                </div>
            </header>

            <nav class="home-menu">
                {menu_routes()
                    .map(|route| {
                        view! {
                            <A href=route.path attr:class="home-menu__item">
                                {icon(route.icon)}
                                <span>{t(route.title_key)}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
