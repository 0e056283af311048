use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container not-found">
            <h1>"Страница не найдена"</h1>
            <A href="/">"На главную"</A>
        </div>
    }
}
