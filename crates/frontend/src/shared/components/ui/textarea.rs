use leptos::prelude::*;

/// Textarea component
#[component]
pub fn Textarea(
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_name = move || name.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(4);

    view! {
        <div class="form__group">
            <textarea
                name=textarea_name
                class="form__textarea"
                placeholder=textarea_placeholder
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
