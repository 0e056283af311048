use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Extra CSS class for the modal surface
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape закрывает окно; слушатель снимается вместе с компонентом
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let surface_class = move || format!("modal {}", class.get().unwrap_or_default());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=surface_class on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
