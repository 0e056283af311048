use crate::layout::global_context::SiteContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Настройки сайта и состояние окна обратной связи доступны всему приложению
    let site = SiteContext::new();
    site.load();
    provide_context(site);

    view! {
        <AppRoutes />
    }
}
