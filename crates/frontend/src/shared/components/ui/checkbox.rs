use leptos::prelude::*;

/// Checkbox component; the label may carry links, so it takes children
#[component]
pub fn Checkbox(
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {children()}
            </label>
        </div>
    }
}
