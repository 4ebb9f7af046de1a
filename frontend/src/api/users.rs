use super::{
    client::ApiClient,
    types::{ApiError, CreateUserRequest, UserMutationResponse, UserSummary},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/users", base_url)))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn create_user(
        &self,
        payload: &CreateUserRequest,
    ) -> Result<UserMutationResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/users", base_url))
                    .json(payload),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn toggle_user_status(&self, id: i64) -> Result<UserMutationResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .patch(format!("{}/users/{}/toggle-status", base_url, id)),
            )
            .await?;
        self.map_json_response(response).await
    }
}
