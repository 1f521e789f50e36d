//! Signup page: account registration form.

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

/// Signup form. A successful registration redirects to the confirm-email
/// prompt; a "user already exist" error renders with an inline signin link
/// via [`ErrorAlert`].
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
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
            let request = crate::net::types::SignupRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                password: password.get_untracked(),
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&request).await {
                    Ok(()) => {
                        submission.update(FormSubmission::succeed);
                        navigate("/confirm-email", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("signup failed: {err}");
                        submission.update(|s| s.fail(err.messages()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <section class="signup-page">
            <Show when=move || submission.get().is_submitting()>
                <Loading/>
            </Show>
            <div class="card">
                <h1>"Create your account"</h1>
                <form method="POST" on:submit=on_submit>
                    <ErrorAlert errors=Signal::derive(move || submission.get().errors)/>
                    <Input
                        label="Name"
                        input_type="text"
                        name="name"
                        value=name
                        placeholder="John Doe"
                        required=true
                    />
                    <Input
                        label="Email"
                        input_type="email"
                        name="email"
                        value=email
                        placeholder="john_doe@example.com"
                        required=true
                    />
                    <Input
                        label="Phone"
                        input_type="tel"
                        name="phone"
                        value=phone
                        placeholder="+971 50 000 0000"
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
                        label="Sign up"
                        submitting=Signal::derive(move || submission.get().is_submitting())
                    />
                </form>
                <p class="card__hint">
                    "Already have an account? " <A href="/signin">"Sign in here"</A>
                </p>
            </div>
        </section>
    }
}
