//! Inline form error list.
//!
//! Renders the normalized error strings from the latest submission.
//! The "user already exist" string gets an inline link to the signin
//! route; everything else renders as plain text.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::form::is_existing_account_error;

#[component]
pub fn ErrorAlert(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.get().is_empty()>
            <div class="form-errors" role="alert">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|message| {
                            if is_existing_account_error(&message) {
                                view! {
                                    <p class="form-errors__item">
                                        {message.clone()}
                                        ". Please "
                                        <A href="/signin">"sign in"</A>
                                        " or use a different email address."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! { <p class="form-errors__item">{message}</p> }.into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
