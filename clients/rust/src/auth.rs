use crate::base::{APIResponse, BaseClient};
use renewal_keeper_api_structs::verify_password;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthClient {
    base: Arc<BaseClient>,
}

impl AuthClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Exchanges the dashboard password for a session token
    pub async fn verify_password<T: Into<String>>(
        &self,
        password: T,
    ) -> APIResponse<verify_password::APIResponse> {
        let body = verify_password::RequestBody {
            password: password.into(),
        };
        self.base
            .post(body, "verify-password", StatusCode::OK)
            .await
    }
}
