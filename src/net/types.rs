//! Wire types shared between the API layer and page state.

use crate::net::error::ErrField;

/// An authenticated user's profile as returned by `GET /user`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub image: Option<String>,
}

/// A content category shown on the home page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

/// An attraction listed under a category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Body for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Body for `PATCH /user`. Only the fields a page actually edits are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// Every endpoint answers with the same envelope convention: `message` set
// to "success" alongside the payload field, or `err` carrying the error
// shape. Missing fields deserialize to `None`.

#[derive(Debug, serde::Deserialize)]
pub struct ProfileResponse {
    pub message: Option<String>,
    pub user: Option<User>,
    pub err: Option<ErrField>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SigninResponse {
    pub message: Option<String>,
    pub token: Option<String>,
    pub err: Option<ErrField>,
}

#[derive(Debug, serde::Deserialize)]
pub struct AckResponse {
    pub message: Option<String>,
    pub err: Option<ErrField>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CategoriesResponse {
    pub message: Option<String>,
    pub categories: Option<Vec<Category>>,
    pub err: Option<ErrField>,
}

#[derive(Debug, serde::Deserialize)]
pub struct AttractionsResponse {
    pub message: Option<String>,
    pub attractions: Option<Vec<Attraction>>,
    pub err: Option<ErrField>,
}
