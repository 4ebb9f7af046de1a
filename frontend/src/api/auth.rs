use reqwest::header::AUTHORIZATION;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, SessionUser, ValidateResponse},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionUser, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(request),
            )
            .await?;
        self.map_json_response(response).await
    }

    /// Checks a token that is not necessarily the one in the store yet.
    pub async fn validate_token(&self, token: &str) -> Result<SessionUser, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/auth/validate", base_url))
                    .header(AUTHORIZATION, format!("Bearer {}", token)),
            )
            .await?;
        let body: ValidateResponse = self.map_json_response(response).await?;
        match body {
            ValidateResponse {
                valid: true,
                user: Some(mut user),
                ..
            } => {
                if user.token.is_empty() {
                    user.token = token.to_string();
                }
                Ok(user)
            }
            ValidateResponse { message, .. } => Err(ApiError::validation(
                message.unwrap_or_else(|| "Token is no longer valid".into()),
            )),
        }
    }
}
