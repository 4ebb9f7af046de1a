use crate::api::{ApiClient, ApiError, CreateVacationRequest, VacationRequest, VacationStatus};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct VacationsRepository {
    client: Rc<ApiClient>,
}

impl VacationsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<VacationRequest>, ApiError> {
        self.client.list_vacations().await
    }

    pub async fn submit(&self, payload: CreateVacationRequest) -> Result<Option<String>, ApiError> {
        self.client
            .create_vacation(&payload)
            .await
            .map(|response| response.message)
    }

    pub async fn approve(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .update_vacation_status(id, VacationStatus::Approved, None)
            .await
            .map(|_| ())
    }

    pub async fn reject(&self, id: i64, comment: Option<String>) -> Result<(), ApiError> {
        self.client
            .update_vacation_status(id, VacationStatus::Rejected, comment)
            .await
            .map(|_| ())
    }

    pub async fn cancel(&self, id: i64) -> Result<(), ApiError> {
        self.client.cancel_vacation(id).await
    }

    pub async fn calendar_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<VacationRequest>, ApiError> {
        self.client.calendar_range(start, end).await
    }

    pub async fn calendar_day(&self, date: NaiveDate) -> Result<Vec<VacationRequest>, ApiError> {
        self.client.calendar_day(date).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::{navigation::MemoryNavigator, storage::MemoryTokenStore};
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> VacationsRepository {
        VacationsRepository::new(ApiClient::with_parts(
            Some(server.url("/api")),
            Rc::new(MemoryTokenStore::with_token("abc")),
            Rc::new(MemoryNavigator::default()),
        ))
    }

    #[tokio::test]
    async fn approve_and_reject_send_status_transitions() {
        let server = MockServer::start_async().await;
        let approve = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/vacations/3/status")
                    .json_body(json!({ "status": "APPROVED" }));
                then.status(200).json_body(json!({ "message": "Approved" }));
            })
            .await;
        let reject = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/vacations/4/status")
                    .json_body(json!({ "status": "REJECTED" }));
                then.status(200).json_body(json!({ "message": "Rejected" }));
            })
            .await;

        let repo = repo(&server);
        repo.approve(3).await.unwrap();
        repo.reject(4, None).await.unwrap();

        approve.assert_async().await;
        reject.assert_async().await;
    }

    #[tokio::test]
    async fn submit_returns_server_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/vacations");
                then.status(200)
                    .json_body(json!({ "message": "Request submitted" }));
            })
            .await;

        let message = repo(&server)
            .submit(CreateVacationRequest {
                start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
                reason: None,
            })
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("Request submitted"));
    }
}
