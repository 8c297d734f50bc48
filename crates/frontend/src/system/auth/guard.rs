use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;
use crate::routes::navigation::LOGIN_PATH;
use crate::shared::i18n::t;

/// Renders its children only for an authenticated session.
/// Without one the user is sent to the login page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                view! {
                    {move || {
                        if session.is_restoring() {
                            view! { <div class="page-loading">{t("loading")}</div> }.into_any()
                        } else {
                            view! { <Redirect path=LOGIN_PATH /> }.into_any()
                        }
                    }}
                }
            }
        >
            {children()}
        </Show>
    }
}
