use leptos::prelude::*;

use crate::routes::navigation::find_route;
use crate::shared::i18n::t;

/// Titled page for a section whose content is not built yet.
#[component]
pub fn SectionPage(path: &'static str) -> impl IntoView {
    let title = find_route(path).map(|r| t(r.title_key)).unwrap_or(path);

    view! {
        <div class="page section-page">
            <h1>{title}</h1>
            <p class="section-page__placeholder">{t("section_placeholder")}</p>
        </div>
    }
}
