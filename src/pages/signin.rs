//! Signin page: exchanges email/password for a session token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_alert::ErrorAlert;
use crate::components::input::Input;
use crate::components::loading::Loading;
use crate::components::submit_button::SubmitButton;
use crate::state::auth::AuthState;
use crate::state::form::FormSubmission;
use crate::state::session::TokenState;

/// Signin form. On success the returned token is persisted and written to
/// the shared token state (which retriggers the session resolver), then
/// navigation home is scheduled after a short delay.
#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token = expect_context::<RwSignal<TokenState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submission = RwSignal::new(FormSubmission::default());

    // Already signed in: go home.
    let navigate = use_navigate();
    Effect::new(move || {
        if auth.get().user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submission.update(FormSubmission::begin);

        #[cfg(feature = "csr")]
        {
            let email = email.get_untracked();
            let password = password.get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signin(&email, &password).await {
                    Ok(issued) => {
                        crate::util::token_store::write(&issued);
                        token.update(|t| t.token = Some(issued));
                        submission.update(FormSubmission::succeed);
                        // Let the token write settle before leaving the page.
                        gloo_timers::future::sleep(std::time::Duration::from_millis(10)).await;
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("signin failed: {err}");
                        submission.update(|s| s.fail(err.messages()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, &token);
        }
    };

    view! {
        <section class="signin-page">
            <Show when=move || submission.get().is_submitting()>
                <Loading/>
            </Show>
            <div class="card">
                <h1>"Welcome back"</h1>
                <form method="POST" on:submit=on_submit>
                    <ErrorAlert errors=Signal::derive(move || submission.get().errors)/>
                    <Input
                        label="Email"
                        input_type="email"
                        name="email"
                        value=email
                        placeholder="john_doe@example.com"
                        required=true
                    />
                    <Input
                        label="Password"
                        input_type="password"
                        name="password"
                        value=password
                        placeholder="••••••••"
                        required=true
                        min_length=3
                    />
                    <SubmitButton
                        label="Log in"
                        submitting=Signal::derive(move || submission.get().is_submitting())
                    />
                </form>
                <p class="card__hint">
                    "Don't have an account? " <A href="/signup">"Sign up here"</A>
                </p>
            </div>
        </section>
    }
}
