use leptos::prelude::*;

/// Баннер с заголовком страницы
#[component]
pub fn TopImage(
    #[prop(into)] title: String,
    /// Фоновое изображение, по умолчанию общий баннер из стилей
    #[prop(optional, into)]
    image: Option<String>,
) -> impl IntoView {
    let style = image
        .map(|url| format!("background-image: url('{}');", url))
        .unwrap_or_default();

    view! {
        <div class="top-image" style=style>
            <div class="container">
                <h1 class="top-image__title">{title}</h1>
            </div>
        </div>
    }
}
