//! Catch-all page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <section class="error-page">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to home"</A>
        </section>
    }
}
