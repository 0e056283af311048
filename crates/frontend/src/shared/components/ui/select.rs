use leptos::prelude::*;

/// Select component with a disabled placeholder option
#[component]
pub fn Select(
    /// Current value, empty string selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty first option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let select_name = move || name.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <select
                name=select_name
                class="form__select"
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" disabled=true selected=move || value.get().is_empty()>
                        {p}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
