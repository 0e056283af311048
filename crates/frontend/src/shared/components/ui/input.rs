use leptos::prelude::*;

/// Input component: placeholder doubles as the label
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", "datetime-local"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_name = move || name.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <input
                id=input_id
                name=input_name
                class=move || format!("form__input {}", additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
