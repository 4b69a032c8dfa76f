use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==================== Модели объявлений ====================

/// A single marketplace listing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub listing_id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub user: Seller,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// The posting user embedded in a listing under the `user` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub photo_id: Option<i64>,
    pub photo_url: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

// ==================== Аутентификация ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login reply. The backend is only contractually bound to a `user_id`
/// field, and its type is not pinned down, so it is kept as a raw JSON
/// value and interpreted through [`LoginResponse::session_user_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// The id to store for the session, when the reply carries a truthy
    /// `user_id`: `null`, `false`, `0` and `""` are rejections, numbers
    /// and non-empty strings are accepted and stringified.
    pub fn session_user_id(&self) -> Option<String> {
        match &self.user_id {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => {
                if n.as_i64() == Some(0) || n.as_f64() == Some(0.0) {
                    None
                } else {
                    Some(n.to_string())
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The user_id/email/password triple a client keeps after a successful
/// login. Written once per login, never re-validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub password: String,
}

impl Session {
    /// Builds the session for a login reply, or `None` when the reply
    /// does not carry a truthy `user_id`.
    pub fn from_login(response: &LoginResponse, email: &str, password: &str) -> Option<Self> {
        response.session_user_id().map(|user_id| Self {
            user_id,
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

// ==================== Управление объявлениями ====================

// Management calls authenticate with the raw email/password pair inside
// the JSON body; there is no token scheme on this backend.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListingRequest {
    pub email: String,
    pub password: String,
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateListingResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub listing_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateListingRequest {
    pub listing_id: i64,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteListingRequest {
    pub listing_id: i64,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPhotoRequest {
    pub email: String,
    pub password: String,
    pub listing_id: i64,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPhotoResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub photo_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePhotoRequest {
    pub email: String,
    pub password: String,
    pub photo_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

// ==================== Общие ответы ====================

/// Plain `{message}` acknowledgement used by the update/delete calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_built_from_truthy_string_id() {
        let response: LoginResponse = serde_json::from_value(json!({"user_id": "abc"})).unwrap();
        let session = Session::from_login(&response, "e@x.com", "p").expect("session");
        assert_eq!(session.user_id, "abc");
        assert_eq!(session.email, "e@x.com");
        assert_eq!(session.password, "p");
    }

    #[test]
    fn numeric_user_id_is_stringified() {
        let response: LoginResponse = serde_json::from_value(json!({"user_id": 42})).unwrap();
        assert_eq!(response.session_user_id().as_deref(), Some("42"));
    }

    #[test]
    fn falsy_user_ids_reject_the_login() {
        for body in [
            json!({}),
            json!({"user_id": null}),
            json!({"user_id": ""}),
            json!({"user_id": 0}),
            json!({"user_id": false}),
        ] {
            let response: LoginResponse = serde_json::from_value(body).unwrap();
            assert_eq!(response.session_user_id(), None);
            assert_eq!(Session::from_login(&response, "e@x.com", "p"), None);
        }
    }

    #[test]
    fn missing_success_field_lands_on_rejection() {
        let response: CreateUserResponse =
            serde_json::from_value(json!({"message": "User created", "user_id": 7})).unwrap();
        assert!(!response.success);
        assert_eq!(response.user_id, Some(7));
    }
}
