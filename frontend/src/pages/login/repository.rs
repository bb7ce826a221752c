use crate::api::{AdminLoginRequest, AdminLoginResponse, ApiClient, ApiError};
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

    pub async fn login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse, ApiError> {
        self.client.login(request).await
    }
}
