use bazaar_core::models::{
    CreateUserRequest, CreateUserResponse, ErrorResponse, Listing, LoginRequest, LoginResponse,
    Session,
};
use bazaar_core::TimeWindow;
use gloo_net::http::{Request, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

// Local-storage keys for the persisted session triple.
const USER_ID_KEY: &str = "user_id";
const EMAIL_KEY: &str = "email";
const PASSWORD_KEY: &str = "password";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Persist the session triple, overwriting any prior values. This is
    /// write-only storage: nothing in the frontend reads the keys back.
    pub fn save_session(session: &Session) {
        let entries = [
            (USER_ID_KEY, &session.user_id),
            (EMAIL_KEY, &session.email),
            (PASSWORD_KEY, &session.password),
        ];
        for (key, value) in entries {
            if let Err(e) = LocalStorage::set(key, value) {
                web_sys::console::log_1(&format!("Failed to save {}: {:?}", key, e).into());
            }
        }
    }

    /// GET /getListings for the given time window.
    pub async fn get_listings(&self, window: &TimeWindow) -> Result<Vec<Listing>, String> {
        let url = self.url("/getListings");
        let start = window.start_param();
        let end = window.end_param();

        let response = Request::get(&url)
            .query([("startTime", start.as_str()), ("endTime", end.as_str())])
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        read_json(response).await
    }

    /// POST /login.
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, String> {
        self.post("/login", req).await
    }

    /// POST /createUser.
    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<CreateUserResponse, String> {
        self.post("/createUser", req).await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, String> {
        let url = self.url(path);

        let body_json = serde_json::to_string(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(body_json)
            .map_err(|e| format!("Failed to set request body: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if (200..300).contains(&status) {
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        // Пытаемся распарсить сообщение об ошибке
        match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(err) => Err(err.error),
            Err(_) => Err(format!("HTTP {}: {}", status, text)),
        }
    }
}
