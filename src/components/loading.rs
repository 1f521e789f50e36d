//! Loading indicator shown while the session resolves or a form submits.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">"Loading..."</span>
        </div>
    }
}
