use crate::error::BazaarClientError;
use bazaar_core::models::{
    AckResponse, AddPhotoRequest, AddPhotoResponse, CreateListingRequest, CreateListingResponse,
    CreateUserRequest, CreateUserResponse, DeleteListingRequest, DeletePhotoRequest, ErrorResponse,
    Listing, LoginRequest, LoginResponse, UpdateListingRequest, UpdateUserRequest,
};
use bazaar_core::TimeWindow;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get_listings(
        &self,
        window: &TimeWindow,
    ) -> Result<Vec<Listing>, BazaarClientError> {
        let url = self.url("/getListings");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("startTime", window.start_param()),
                ("endTime", window.end_param()),
            ])
            .send()
            .await?;

        self.handle_json(response).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, BazaarClientError> {
        let url = self.url("/login");
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_json(response).await
    }

    pub async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<CreateUserResponse, BazaarClientError> {
        let url = self.url("/createUser");
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_json(response).await
    }

    pub async fn create_listing(
        &self,
        req: &CreateListingRequest,
    ) -> Result<CreateListingResponse, BazaarClientError> {
        let url = self.url("/createListing");
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_json(response).await
    }

    pub async fn update_listing(
        &self,
        req: &UpdateListingRequest,
    ) -> Result<AckResponse, BazaarClientError> {
        let url = self.url("/updateListing");
        let response = self.client.put(&url).json(req).send().await?;

        self.handle_json(response).await
    }

    pub async fn delete_listing(
        &self,
        req: &DeleteListingRequest,
    ) -> Result<AckResponse, BazaarClientError> {
        let url = self.url("/deleteListing");
        let response = self.client.delete(&url).json(req).send().await?;

        self.handle_json(response).await
    }

    pub async fn add_photo(
        &self,
        req: &AddPhotoRequest,
    ) -> Result<AddPhotoResponse, BazaarClientError> {
        let url = self.url("/addListingPhoto");
        let response = self.client.put(&url).json(req).send().await?;

        self.handle_json(response).await
    }

    pub async fn delete_photo(
        &self,
        req: &DeletePhotoRequest,
    ) -> Result<AckResponse, BazaarClientError> {
        let url = self.url("/deleteListingPhoto");
        let response = self.client.delete(&url).json(req).send().await?;

        self.handle_json(response).await
    }

    pub async fn update_user(
        &self,
        req: &UpdateUserRequest,
    ) -> Result<AckResponse, BazaarClientError> {
        let url = self.url("/updateUser");
        let response = self.client.put(&url).json(req).send().await?;

        self.handle_json(response).await
    }

    async fn handle_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, BazaarClientError> {
        let status = response.status();

        match status {
            StatusCode::OK | StatusCode::CREATED => {
                let text = response.text().await?;
                serde_json::from_str(&text)
                    .map_err(|e| BazaarClientError::SerializationError(e.to_string()))
            }
            StatusCode::UNAUTHORIZED => {
                let error_text = error_message(response).await?;
                Err(BazaarClientError::Unauthorized(error_text))
            }
            StatusCode::NOT_FOUND => Err(BazaarClientError::NotFound),
            StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN => {
                let error_text = error_message(response).await?;
                Err(BazaarClientError::InvalidRequest(error_text))
            }
            _ => {
                let error_text = response.text().await?;
                Err(BazaarClientError::TransportError(format!(
                    "HTTP {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

// Ошибки бэкенда приходят как {"error": "..."}
async fn error_message(response: reqwest::Response) -> Result<String, BazaarClientError> {
    let text = response.text().await?;
    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(err) => Ok(err.error),
        Err(_) => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_join_handles_trailing_slashes() {
        let client = HttpClient::new("http://localhost:8000/");
        assert_eq!(client.url("/getListings"), "http://localhost:8000/getListings");
        assert_eq!(client.url("login"), "http://localhost:8000/login");
    }
}
