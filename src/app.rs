//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    category::CategoryPage, confirm_email::ConfirmEmailPage, error::ErrorPage, home::HomePage,
    profile::ProfilePage, settings::SettingsPage, signin::SigninPage, signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::state::session::TokenState;

/// Root application component.
///
/// Provides the token and auth contexts, wires the session resolver to the
/// token read from storage, and sets up client-side routing. The resolver
/// is the only writer of the shared user besides the settings/profile
/// pages, which overwrite it after a confirmed server-side update.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let token = RwSignal::new(TokenState {
        token: crate::util::token_store::read(),
    });
    let auth = RwSignal::new(AuthState::default());

    provide_context(token);
    provide_context(auth);

    #[cfg(feature = "csr")]
    crate::state::session::spawn_session_resolver(token, auth);

    view! {
        <Title text="Arabian Odyssey"/>

        <Router>
            <Routes fallback=|| view! { <ErrorPage/> }>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("signin") view=SigninPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route
                        path=(StaticSegment("category"), ParamSegment("category"))
                        view=CategoryPage
                    />
                </ParentRoute>
                <Route path=StaticSegment("confirm-email") view=ConfirmEmailPage/>
            </Routes>
        </Router>
    }
}
