//! Labeled, controlled form input.
//!
//! Validation stays on the widget: `required` and `minlength` are plain
//! HTML constraints, so invalid fields never reach the network layer.

use leptos::prelude::*;

#[component]
pub fn Input(
    label: &'static str,
    input_type: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] min_length: Option<i32>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                name=name
                placeholder=placeholder
                required=required
                minlength=min_length
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
