use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Текст письма в том виде, в каком он уходит в почтовый клиент
#[component]
pub fn FeedbackPreview(
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_close class="feedback-preview">
            <div class="feedback-preview__body" style="white-space: pre-wrap;">
                {body}
            </div>
        </Modal>
    }
}
