use super::global_context::use_site_context;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site_context();
    let email = move || site.config.get().support_email;

    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                <span>"АО «Мособлэнерго»"</span>
                <span>
                    "Горячая линия: "
                    <a href="tel:+74959950099">"+7 (495) 99-500-99"</a>
                </span>
                <span>
                    "E-mail: "
                    <a href=move || format!("mailto:{}", email())>{email}</a>
                </span>
            </div>
        </footer>
    }
}
