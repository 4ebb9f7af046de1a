use crate::api::{ApiClient, ApiError, CreateUserRequest, UserSummary};
use std::rc::Rc;

#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl UsersRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.client.list_users().await
    }

    pub async fn create(&self, payload: CreateUserRequest) -> Result<Option<String>, ApiError> {
        self.client
            .create_user(&payload)
            .await
            .map(|response| response.message)
    }

    pub async fn toggle_status(&self, id: i64) -> Result<Option<String>, ApiError> {
        self.client
            .toggle_user_status(id)
            .await
            .map(|response| response.message)
    }
}
