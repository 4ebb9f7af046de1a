use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{
        ApiError, CreateVacationRequest, StatusUpdateRequest, VacationMutationResponse,
        VacationRequest, VacationStatus,
    },
};

impl ApiClient {
    /// Requests visible to the caller: all of them for admins, own ones otherwise.
    pub async fn list_vacations(&self) -> Result<Vec<VacationRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/vacations", base_url)))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn create_vacation(
        &self,
        payload: &CreateVacationRequest,
    ) -> Result<VacationMutationResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/vacations", base_url))
                    .json(payload),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn update_vacation_status(
        &self,
        id: i64,
        status: VacationStatus,
        admin_comment: Option<String>,
    ) -> Result<VacationMutationResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = StatusUpdateRequest {
            status,
            admin_comment,
        };
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/vacations/{}/status", base_url, id))
                    .json(&payload),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn cancel_vacation(&self, id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/vacations/{}", base_url, id)),
            )
            .await?;
        self.map_empty_response(response).await
    }

    /// Approved requests overlapping `[start, end]`.
    pub async fn calendar_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<VacationRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let params = [
            ("startDate", start.to_string()),
            ("endDate", end.to_string()),
        ];
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/vacations/calendar", base_url))
                    .query(&params),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn calendar_day(&self, date: NaiveDate) -> Result<Vec<VacationRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/vacations/calendar/{}", base_url, date)),
            )
            .await?;
        self.map_json_response(response).await
    }
}
