use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Exchanges credentials for tokens, then loads the signed-in account.
    pub async fn login(&self, request: LoginRequest) -> Result<UserResponse, ApiError> {
        self.client.login(&request).await?;
        self.client.get_me().await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ApiError> {
        self.client.register(request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }
}
