use super::{
    client::ApiClient,
    types::{AdminLoginRequest, AdminLoginResponse, ApiError},
};

impl ApiClient {
    /// Exchanges admin credentials for an access token. The token is returned, not installed.
    pub async fn login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse, ApiError> {
        self.post_json("/auth/admin/login/", request).await
    }
}
