use chrono::NaiveDate;
use leptos::*;

use crate::api::{ApiError, VacationRequest};
use crate::pages::vacations::{
    repository::VacationsRepository,
    types::StatusFilter,
    utils::{precheck, preview, BalancePreview, MessageState, VacationDraft},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacationListState {
    pub items: Vec<VacationRequest>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub filter: StatusFilter,
}

impl VacationListState {
    pub fn start_loading(self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self
        }
    }

    pub fn loaded(self, items: Vec<VacationRequest>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
            ..self
        }
    }

    pub fn failed(self, error: ApiError) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: (!error.is_unauthorized()).then_some(error),
            ..self
        }
    }

    pub fn with_filter(self, filter: StatusFilter) -> Self {
        Self { filter, ..self }
    }

    pub fn visible(&self) -> Vec<VacationRequest> {
        self.items
            .iter()
            .filter(|vacation| self.filter.matches(vacation))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.visible().is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct VacationListViewModel {
    pub state: RwSignal<VacationListState>,
    pub message: RwSignal<MessageState>,
    repository: StoredValue<VacationsRepository>,
}

impl VacationListViewModel {
    pub fn new(repository: VacationsRepository) -> Self {
        Self {
            state: create_rw_signal(VacationListState::default().start_loading()),
            message: create_rw_signal(MessageState::default()),
            repository: store_value(repository),
        }
    }

    fn transition(&self, f: impl FnOnce(VacationListState) -> VacationListState) {
        self.state.update(|state| *state = f(std::mem::take(state)));
    }

    pub fn visible(&self) -> Signal<Vec<VacationRequest>> {
        let state = self.state;
        Signal::derive(move || state.with(VacationListState::visible))
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        self.transition(|state| state.with_filter(filter));
    }

    pub async fn refresh(self) {
        self.transition(VacationListState::start_loading);
        let repository = self.repository.get_value();
        match repository.list().await {
            Ok(items) => self.transition(|state| state.loaded(items)),
            Err(err) => {
                log::warn!("Loading vacation requests failed: {}", err);
                self.transition(|state| state.failed(err));
            }
        }
    }

    pub async fn approve(self, id: i64) {
        let result = self.repository.get_value().approve(id).await;
        self.finish_mutation(result, "Request approved").await;
    }

    pub async fn reject(self, id: i64, comment: Option<String>) {
        let comment = comment
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        let result = self.repository.get_value().reject(id, comment).await;
        self.finish_mutation(result, "Request rejected").await;
    }

    pub async fn cancel(self, id: i64) {
        let result = self.repository.get_value().cancel(id).await;
        self.finish_mutation(result, "Request cancelled").await;
    }

    /// Successful mutations always re-fetch; failures leave the list untouched.
    async fn finish_mutation(self, result: Result<(), ApiError>, success: &str) {
        match result {
            Ok(()) => {
                self.message.update(|msg| msg.set_success(success));
                self.refresh().await;
            }
            Err(err) if err.is_unauthorized() => {}
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}

#[derive(Clone, Copy)]
pub struct VacationFormViewModel {
    pub draft: RwSignal<VacationDraft>,
    pub error: RwSignal<Option<ApiError>>,
    pub submitting: RwSignal<bool>,
    repository: StoredValue<VacationsRepository>,
}

impl VacationFormViewModel {
    pub fn new(repository: VacationsRepository) -> Self {
        Self {
            draft: create_rw_signal(VacationDraft::default()),
            error: create_rw_signal(None),
            submitting: create_rw_signal(false),
            repository: store_value(repository),
        }
    }

    pub fn preview(&self, available_days: i64) -> Option<BalancePreview> {
        self.draft.with(|draft| preview(draft, available_days))
    }

    pub fn reset(&self) {
        self.draft.set(VacationDraft::default());
        self.error.set(None);
    }

    /// Returns `true` once the backend accepted the request.
    pub async fn submit(self, today: NaiveDate, available_days: i64) -> bool {
        if self.submitting.get_untracked() {
            return false;
        }
        let payload = match self
            .draft
            .with_untracked(|draft| precheck(draft, today, available_days))
        {
            Ok(payload) => payload,
            Err(err) => {
                self.error.set(Some(err.into()));
                return false;
            }
        };

        self.error.set(None);
        self.submitting.set(true);
        let result = self.repository.get_value().submit(payload).await;
        self.submitting.set(false);

        match result {
            Ok(message) => {
                log::info!(
                    "{}",
                    message.unwrap_or_else(|| "Vacation request submitted".into())
                );
                self.draft.set(VacationDraft::default());
                true
            }
            Err(err) => {
                if !err.is_unauthorized() {
                    self.error.set(Some(err));
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::VacationStatus;

    fn item(id: i64, status: VacationStatus) -> VacationRequest {
        VacationRequest {
            id,
            user_id: None,
            user_full_name: None,
            user_email: None,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            reason: None,
            status,
            admin_comment: None,
            approved_by_name: None,
            approved_at: None,
            created_at: None,
            days_count: None,
        }
    }

    #[test]
    fn list_state_transitions() {
        let state = VacationListState::default().start_loading();
        assert!(state.loading);

        let state = state.loaded(vec![
            item(1, VacationStatus::Pending),
            item(2, VacationStatus::Approved),
        ]);
        assert!(!state.loading);
        assert_eq!(state.visible().len(), 2);

        let state = state.with_filter(StatusFilter::Only(VacationStatus::Rejected));
        assert!(state.is_empty());

        let state = state.start_loading().failed(ApiError::request_failed("offline"));
        assert!(state.items.is_empty());
        assert_eq!(state.error.map(|e| e.code), Some("REQUEST_FAILED".into()));
    }

    #[test]
    fn unauthorized_failure_is_not_shown() {
        let state = VacationListState::default()
            .start_loading()
            .failed(ApiError::unauthorized());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }
}
