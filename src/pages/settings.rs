//! Settings page: contact details and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_alert::ErrorAlert;
use crate::components::input::Input;
use crate::components::submit_button::SubmitButton;
use crate::state::auth::AuthState;
use crate::state::form::FormSubmission;
use crate::state::session::TokenState;

/// Contact-detail form plus sign-out. A confirmed update overwrites the
/// shared user with the profile the server returns; sign-out clears the
/// stored token, which the session resolver turns into a cleared user.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token = expect_context::<RwSignal<TokenState>>();
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let submission = RwSignal::new(FormSubmission::default());

    // Session resolved without a user: this page needs one.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    // Pre-fill from the current profile.
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            email.set(user.email);
            phone.set(user.phone.unwrap_or_default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            // The redirect effect handles the no-session case.
            let Some(stored) = token.get_untracked().token else {
                return;
            };
            submission.update(FormSubmission::begin);
            let update = crate::net::types::AccountUpdate {
                email: Some(email.get_untracked()),
                phone: Some(phone.get_untracked()),
                ..Default::default()
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_account(&stored, &update).await {
                    Ok(user) => {
                        auth.update(|a| a.user = Some(user));
                        submission.update(FormSubmission::succeed);
                    }
                    Err(err) => {
                        leptos::logging::warn!("settings update failed: {err}");
                        submission.update(|s| s.fail(err.messages()));
                    }
                }
            });
        }
    };

    let navigate = use_navigate();
    let on_signout = move |_| {
        crate::util::token_store::clear();
        token.update(|t| t.token = None);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <section class="settings-page">
            <div class="card">
                <h1>"Settings"</h1>
                <form method="POST" on:submit=on_submit>
                    <ErrorAlert errors=Signal::derive(move || submission.get().errors)/>
                    <Input
                        label="Email"
                        input_type="email"
                        name="email"
                        value=email
                        required=true
                    />
                    <Input label="Phone" input_type="tel" name="phone" value=phone/>
                    <SubmitButton
                        label="Save changes"
                        submitting=Signal::derive(move || submission.get().is_submitting())
                    />
                </form>
                <button class="btn btn--danger" on:click=on_signout>
                    "Sign out"
                </button>
            </div>
        </section>
    }
}
