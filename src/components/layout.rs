//! Shared page chrome: header navigation plus the session-loading gate.
//!
//! Child routes render through the outlet only once the session resolver
//! has finished its first pass; until then the layout shows the loading
//! indicator so pages never act on a half-resolved session.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::components::loading::Loading;
use crate::state::auth::AuthState;

#[component]
pub fn Layout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.get().user.is_some();

    view! {
        <div class="layout">
            <header class="layout__header">
                <A href="/">"Arabian Odyssey"</A>
                <nav class="layout__nav">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <A href="/signin">"Sign in"</A>
                                <A href="/signup">"Sign up"</A>
                            }
                        }
                    >
                        <A href="/profile">"Profile"</A>
                        <A href="/settings">"Settings"</A>
                    </Show>
                </nav>
            </header>
            <main class="layout__main">
                <Show when=move || !auth.get().loading fallback=|| view! { <Loading/> }>
                    <Outlet/>
                </Show>
            </main>
        </div>
    }
}
