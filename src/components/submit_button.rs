//! Submit button that disables itself while a submission is in flight.

use leptos::prelude::*;

#[component]
pub fn SubmitButton(
    label: &'static str,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView {
    view! {
        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
            {move || if submitting.get() { "Please wait..." } else { label }}
        </button>
    }
}
