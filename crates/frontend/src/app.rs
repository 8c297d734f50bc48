use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The session lives for the whole app; pages read it via use_session()
    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
