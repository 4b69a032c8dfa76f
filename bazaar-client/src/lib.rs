pub mod error;
pub mod http_client;

pub use bazaar_core::models;
pub use bazaar_core::TimeWindow;

use bazaar_core::models::{
    AckResponse, AddPhotoRequest, AddPhotoResponse, CreateListingRequest, CreateListingResponse,
    CreateUserRequest, CreateUserResponse, DeleteListingRequest, DeletePhotoRequest, Listing,
    LoginRequest, Session, UpdateListingRequest, UpdateUserRequest,
};
use error::BazaarClientError;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Marketplace client over the backend's HTTP API.
///
/// Holds the login session in memory; the backend authenticates every
/// management call with the raw email/password pair in the request body,
/// so the pair is kept alongside the user id and injected on each call.
#[derive(Debug, Clone)]
pub struct BazaarClient {
    http: http_client::HttpClient,
    session: Arc<Mutex<Option<Session>>>,
}

impl BazaarClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: http_client::HttpClient::new(base_url),
            session: Arc::new(Mutex::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Adopt a previously saved session (e.g. loaded from disk).
    pub async fn set_session(&self, session: Session) {
        let mut lock = self.session.lock().await;
        *lock = Some(session);
    }

    /// The current session, if a login succeeded or a session was adopted.
    pub async fn session(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    /// Drop the current session (logout).
    pub async fn clear_session(&self) {
        let mut lock = self.session.lock().await;
        *lock = None;
    }

    async fn require_session(&self) -> Result<Session, BazaarClientError> {
        self.session
            .lock()
            .await
            .clone()
            .ok_or_else(|| BazaarClientError::Unauthorized("No active session, login first".into()))
    }

    /// Fetch the active listings created inside `window`.
    pub async fn get_listings(&self, window: &TimeWindow) -> Result<Vec<Listing>, BazaarClientError> {
        tracing::debug!(
            start = %window.start_param(),
            end = %window.end_param(),
            "Fetching listings"
        );
        self.http.get_listings(window).await
    }

    /// Login with email and password. On success the session is stored on
    /// the client and returned; a reply without a usable `user_id` maps to
    /// [`BazaarClientError::Unauthorized`].
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Session, BazaarClientError> {
        let email = email.into();
        let password = password.into();

        tracing::debug!("Login called for email: {}", email);

        let req = LoginRequest {
            email: email.clone(),
            password: password.clone(),
        };
        let response = self.http.login(&req).await?;

        match Session::from_login(&response, &email, &password) {
            Some(session) => {
                tracing::debug!("Login accepted, storing session");
                let mut lock = self.session.lock().await;
                *lock = Some(session.clone());
                Ok(session)
            }
            None => Err(BazaarClientError::Unauthorized(
                "Invalid login credentials".into(),
            )),
        }
    }

    /// Create a new account. A reply with `success: false` maps to
    /// [`BazaarClientError::InvalidRequest`]. No auto-login happens.
    pub async fn create_user(
        &self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<CreateUserResponse, BazaarClientError> {
        let username = username.into();

        tracing::debug!("Create user called for username: {}", username);

        let req = CreateUserRequest {
            username,
            email: email.into(),
            password: password.into(),
        };
        let response = self.http.create_user(&req).await?;

        if response.success {
            Ok(response)
        } else {
            Err(BazaarClientError::InvalidRequest(
                response
                    .message
                    .unwrap_or_else(|| "Failed to create user".into()),
            ))
        }
    }

    /// Create a listing owned by the logged-in user.
    pub async fn create_listing(
        &self,
        title: impl Into<String>,
        price: f64,
        description: Option<String>,
    ) -> Result<CreateListingResponse, BazaarClientError> {
        let session = self.require_session().await?;
        let req = CreateListingRequest {
            email: session.email,
            password: session.password,
            title: title.into(),
            price,
            description,
        };
        self.http.create_listing(&req).await
    }

    /// Update title/price/description of an owned listing.
    pub async fn update_listing(
        &self,
        listing_id: i64,
        title: Option<String>,
        price: Option<f64>,
        description: Option<String>,
    ) -> Result<AckResponse, BazaarClientError> {
        let session = self.require_session().await?;
        let req = UpdateListingRequest {
            listing_id,
            email: session.email,
            password: session.password,
            title,
            price,
            description,
        };
        self.http.update_listing(&req).await
    }

    /// Deactivate an owned listing. The backend keeps the record and
    /// flips its status, so this is reversible server-side.
    pub async fn delete_listing(&self, listing_id: i64) -> Result<AckResponse, BazaarClientError> {
        let session = self.require_session().await?;
        let req = DeleteListingRequest {
            listing_id,
            email: session.email,
            password: session.password,
        };
        self.http.delete_listing(&req).await
    }

    /// Attach a photo URL to an owned listing.
    pub async fn add_photo(
        &self,
        listing_id: i64,
        photo_url: impl Into<String>,
    ) -> Result<AddPhotoResponse, BazaarClientError> {
        let session = self.require_session().await?;
        let req = AddPhotoRequest {
            email: session.email,
            password: session.password,
            listing_id,
            photo_url: photo_url.into(),
        };
        self.http.add_photo(&req).await
    }

    /// Remove a photo from an owned listing.
    pub async fn delete_photo(&self, photo_id: i64) -> Result<AckResponse, BazaarClientError> {
        let session = self.require_session().await?;
        let req = DeletePhotoRequest {
            email: session.email,
            password: session.password,
            photo_id,
        };
        self.http.delete_photo(&req).await
    }

    /// Update the logged-in user's profile. The stored session keeps the
    /// same email/password pair afterwards.
    pub async fn update_user(
        &self,
        username: Option<String>,
        profile_picture_url: Option<String>,
    ) -> Result<AckResponse, BazaarClientError> {
        let session = self.require_session().await?;
        let req = UpdateUserRequest {
            email: session.email,
            password: session.password,
            username,
            profile_picture_url,
        };
        self.http.update_user(&req).await
    }
}
