use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, RegisterRequest, TokenResponse, UserResponse},
};
use crate::utils::storage;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let url = self.url("/auth/login").await;
        let tokens: TokenResponse = self
            .send_json(self.http_client().post(url).json(request))
            .await?;
        storage::store_tokens(&tokens.access_token, &tokens.refresh_token)?;
        Ok(tokens)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ApiError> {
        let url = self.url("/auth/register").await;
        self.send_json(self.http_client().post(url).json(request))
            .await
    }

    /// Trades the stored refresh token for a new access token. Not wired into
    /// the 401 handling, which signs the user out instead.
    pub async fn refresh_token(&self) -> Result<TokenResponse, ApiError> {
        let refresh_token =
            storage::refresh_token().ok_or_else(|| ApiError::unknown("No refresh token"))?;
        let url = self.url("/auth/refresh").await;
        let tokens: TokenResponse = self
            .send_json(
                self.http_client()
                    .post(url)
                    .json(&json!({ "refresh_token": refresh_token })),
            )
            .await?;
        storage::store_tokens(&tokens.access_token, &tokens.refresh_token)?;
        Ok(tokens)
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let url = self.url("/auth/me").await;
        self.send_json(self.http_client().get(url)).await
    }

    /// Tells the server the session ended. Local tokens are dropped either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.url("/auth/logout").await;
        let result = self.send_empty(self.http_client().post(url)).await;
        storage::clear_tokens();
        result
    }
}
