//! REST API wrappers for the Arabian Odyssey backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, each raced against
//! a bounded timeout. Native builds get stubs returning an error, since
//! these endpoints are only reachable from the browser.
//!
//! Parsing is split from transport: the `parse_*` functions take the raw
//! response text, so envelope handling is covered by native tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::types::{
    AccountUpdate, AckResponse, Attraction, AttractionsResponse, CategoriesResponse, Category,
    ProfileResponse, SigninResponse, SignupRequest, User,
};

/// Backend origin, fixed at build time.
pub const API_BASE: &str = "https://arabian-odyssey.vercel.app";

/// Namespace prefixed to the token header so the server can tell this
/// app's tokens apart from others.
pub const TOKEN_NAMESPACE: &str = "ArabianOdyssey";

#[cfg(feature = "csr")]
const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Value of the `token` header for authenticated requests.
pub fn token_header(token: &str) -> String {
    format!("{TOKEN_NAMESPACE}__{token}")
}

/// Send a request and collect the response body as text, giving up after
/// [`REQUEST_TIMEOUT_MS`] so a stalled network cannot hang a form forever.
#[cfg(feature = "csr")]
async fn send_with_timeout(request: gloo_net::http::Request) -> Result<String, ApiError> {
    use futures::future::{Either, select};

    let send = Box::pin(async move {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    });
    let timeout = Box::pin(gloo_timers::future::sleep(std::time::Duration::from_millis(
        REQUEST_TIMEOUT_MS,
    )));

    match select(send, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Exchange the stored token for the current user's profile.
pub async fn fetch_profile(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(&format!("{API_BASE}/user"))
            .header("Content-Type", "application/json")
            .header("token", &token_header(token))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = send_with_timeout(request).await?;
        parse_profile_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::unavailable())
    }
}

/// Sign in with email and password, returning the session token.
pub async fn signin(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        #[derive(serde::Serialize)]
        struct SigninBody<'a> {
            email: &'a str,
            password: &'a str,
        }

        let request = gloo_net::http::Request::post(&format!("{API_BASE}/auth/signin"))
            .json(&SigninBody { email, password })
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = send_with_timeout(request).await?;
        parse_signin_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::unavailable())
    }
}

/// Register a new account. The server sends a confirmation email; the
/// caller redirects to the confirm-email prompt on success.
pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(&format!("{API_BASE}/auth/signup"))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = send_with_timeout(request).await?;
        parse_ack_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Update account fields, returning the refreshed profile.
pub async fn update_account(token: &str, update: &AccountUpdate) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::patch(&format!("{API_BASE}/user"))
            .header("token", &token_header(token))
            .json(update)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = send_with_timeout(request).await?;
        parse_profile_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, update);
        Err(ApiError::unavailable())
    }
}

/// List the content categories for the home page.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(&format!("{API_BASE}/category"))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = send_with_timeout(request).await?;
        parse_categories_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// List the attractions under one category.
pub async fn fetch_category_attractions(category: String) -> Result<Vec<Attraction>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(&format!("{API_BASE}/category/{category}"))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = send_with_timeout(request).await?;
        parse_attractions_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = category;
        Err(ApiError::unavailable())
    }
}

fn is_success(message: Option<&str>) -> bool {
    message == Some("success")
}

pub fn parse_profile_body(body: &str) -> Result<User, ApiError> {
    let response: ProfileResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if let Some(err) = response.err {
        return Err(ApiError::Server(err.into_messages()));
    }
    if is_success(response.message.as_deref()) {
        response
            .user
            .ok_or_else(|| ApiError::Malformed("success response without a user".to_owned()))
    } else {
        Err(ApiError::Malformed("missing success confirmation".to_owned()))
    }
}

pub fn parse_signin_body(body: &str) -> Result<String, ApiError> {
    let response: SigninResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if let Some(err) = response.err {
        return Err(ApiError::Server(err.into_messages()));
    }
    if is_success(response.message.as_deref()) {
        response
            .token
            .ok_or_else(|| ApiError::Malformed("success response without a token".to_owned()))
    } else {
        Err(ApiError::Malformed("missing success confirmation".to_owned()))
    }
}

pub fn parse_ack_body(body: &str) -> Result<(), ApiError> {
    let response: AckResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if let Some(err) = response.err {
        return Err(ApiError::Server(err.into_messages()));
    }
    if is_success(response.message.as_deref()) {
        Ok(())
    } else {
        Err(ApiError::Malformed("missing success confirmation".to_owned()))
    }
}

pub fn parse_categories_body(body: &str) -> Result<Vec<Category>, ApiError> {
    let response: CategoriesResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if let Some(err) = response.err {
        return Err(ApiError::Server(err.into_messages()));
    }
    if is_success(response.message.as_deref()) {
        Ok(response.categories.unwrap_or_default())
    } else {
        Err(ApiError::Malformed("missing success confirmation".to_owned()))
    }
}

pub fn parse_attractions_body(body: &str) -> Result<Vec<Attraction>, ApiError> {
    let response: AttractionsResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if let Some(err) = response.err {
        return Err(ApiError::Server(err.into_messages()));
    }
    if is_success(response.message.as_deref()) {
        Ok(response.attractions.unwrap_or_default())
    } else {
        Err(ApiError::Malformed("missing success confirmation".to_owned()))
    }
}
