//! Profile page: public identity details.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_alert::ErrorAlert;
use crate::components::input::Input;
use crate::components::submit_button::SubmitButton;
use crate::state::auth::AuthState;
use crate::state::form::FormSubmission;
use crate::state::session::TokenState;

/// Shows the signed-in profile and lets the user edit display name and
/// avatar. A confirmed update overwrites the shared user value.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let token = expect_context::<RwSignal<TokenState>>();
    let name = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
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
            name.set(user.name);
            image.set(user.image.unwrap_or_default());
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
            let avatar = image.get_untracked();
            let update = crate::net::types::AccountUpdate {
                name: Some(name.get_untracked()),
                image: if avatar.is_empty() { None } else { Some(avatar) },
                ..Default::default()
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_account(&stored, &update).await {
                    Ok(user) => {
                        auth.update(|a| a.user = Some(user));
                        submission.update(FormSubmission::succeed);
                    }
                    Err(err) => {
                        leptos::logging::warn!("profile update failed: {err}");
                        submission.update(|s| s.fail(err.messages()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &token;
        }
    };

    let summary = move || {
        auth.get().user.map(|user| {
            view! {
                <div class="profile-card">
                    {user
                        .image
                        .map(|src| view! { <img class="profile-card__avatar" src=src alt="Avatar"/> })}
                    <h2 class="profile-card__name">{user.name}</h2>
                    <p class="profile-card__email">{user.email}</p>
                    {user.phone.map(|phone| view! { <p class="profile-card__phone">{phone}</p> })}
                </div>
            }
        })
    };

    view! {
        <section class="profile-page">
            <div class="card">
                <h1>"Profile"</h1>
                {summary}
                <form method="POST" on:submit=on_submit>
                    <ErrorAlert errors=Signal::derive(move || submission.get().errors)/>
                    <Input
                        label="Display name"
                        input_type="text"
                        name="name"
                        value=name
                        required=true
                    />
                    <Input
                        label="Avatar image URL"
                        input_type="url"
                        name="image"
                        value=image
                        placeholder="https://"
                    />
                    <SubmitButton
                        label="Save changes"
                        submitting=Signal::derive(move || submission.get().is_submitting())
                    />
                </form>
            </div>
        </section>
    }
}
