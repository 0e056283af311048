pub mod footer;
pub mod global_context;
pub mod header;
pub mod top_image;

use crate::domain::a001_feedback::ui::FeedbackModal;
use global_context::use_site_context;
use leptos::prelude::*;

/// Каркас страницы: шапка, содержимое, подвал и окно обратной связи.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let site = use_site_context();

    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
            <Show when=move || site.feedback_open.get()>
                <FeedbackModal on_close=Callback::new(move |_| site.close_feedback()) />
            </Show>
        </div>
    }
}
