use super::global_context::use_site_context;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site_context();

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <A href="/" attr:class="site-header__logo">"Мособлэнерго"</A>
                <nav class="site-header__nav">
                    <A href="/filials">"Филиалы"</A>
                    <A href="/specialProjects">"Специальные проекты"</A>
                    <A href="/additionalServices">"Дополнительные услуги"</A>
                </nav>
                <Button
                    class="site-header__feedback"
                    on_click=Callback::new(move |_| site.open_feedback())
                >
                    {icon("mail")}
                    "Обратная связь"
                </Button>
            </div>
        </header>
    }
}
