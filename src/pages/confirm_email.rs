//! Post-signup prompt asking the user to confirm their email address.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ConfirmEmailPage() -> impl IntoView {
    view! {
        <section class="confirm-email-page">
            <div class="card">
                <h1>"Confirm your email"</h1>
                <p>
                    "We sent a confirmation link to your email address. "
                    "Follow it to activate your account, then sign in."
                </p>
                <A href="/signin">"Go to sign in"</A>
            </div>
        </section>
    }
}
