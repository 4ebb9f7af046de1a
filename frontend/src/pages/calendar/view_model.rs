use chrono::NaiveDate;
use leptos::*;

use crate::api::{ApiError, VacationRequest, VacationStatus};
use crate::pages::vacations::repository::VacationsRepository;
use crate::utils::time::MonthCursor;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarState {
    pub month: MonthCursor,
    pub vacations: Vec<VacationRequest>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub selected: Option<NaiveDate>,
    pub day_items: Vec<VacationRequest>,
    pub day_loading: bool,
    pub day_error: Option<ApiError>,
}

impl CalendarState {
    pub fn new(month: MonthCursor) -> Self {
        Self {
            month,
            vacations: Vec::new(),
            loading: false,
            error: None,
            selected: None,
            day_items: Vec::new(),
            day_loading: false,
            day_error: None,
        }
    }

    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        (self.month.first_day(), self.month.last_day())
    }

    /// Moves to another month and drops everything tied to the old one.
    pub fn navigate(self, delta: i32) -> Self {
        Self::new(self.month.shift(delta))
    }

    pub fn start_loading(self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self
        }
    }

    pub fn month_loaded(self, month: MonthCursor, vacations: Vec<VacationRequest>) -> Self {
        if month != self.month {
            return self;
        }
        Self {
            vacations,
            loading: false,
            error: None,
            ..self
        }
    }

    pub fn month_failed(self, month: MonthCursor, error: ApiError) -> Self {
        if month != self.month {
            return self;
        }
        Self {
            vacations: Vec::new(),
            loading: false,
            error: (!error.is_unauthorized()).then_some(error),
            ..self
        }
    }

    pub fn select(self, date: NaiveDate) -> Self {
        Self {
            selected: Some(date),
            day_items: Vec::new(),
            day_loading: true,
            day_error: None,
            ..self
        }
    }

    pub fn clear_selection(self) -> Self {
        Self {
            selected: None,
            day_items: Vec::new(),
            day_loading: false,
            day_error: None,
            ..self
        }
    }

    pub fn day_loaded(self, date: NaiveDate, items: Vec<VacationRequest>) -> Self {
        if self.selected != Some(date) {
            return self;
        }
        Self {
            day_items: items,
            day_loading: false,
            ..self
        }
    }

    pub fn day_failed(self, date: NaiveDate, error: ApiError) -> Self {
        if self.selected != Some(date) {
            return self;
        }
        Self {
            day_loading: false,
            day_error: (!error.is_unauthorized()).then_some(error),
            ..self
        }
    }

    /// Approved leave overlapping `date`, as a marker source for one cell.
    pub fn vacations_on(&self, date: NaiveDate) -> Vec<VacationRequest> {
        vacations_on(&self.vacations, date)
    }
}

pub fn vacations_on(vacations: &[VacationRequest], date: NaiveDate) -> Vec<VacationRequest> {
    vacations
        .iter()
        .filter(|v| v.status == VacationStatus::Approved && v.covers(date))
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct CalendarViewModel {
    pub state: RwSignal<CalendarState>,
    repository: StoredValue<VacationsRepository>,
}

impl CalendarViewModel {
    pub fn new(repository: VacationsRepository, month: MonthCursor) -> Self {
        Self {
            state: create_rw_signal(CalendarState::new(month).start_loading()),
            repository: store_value(repository),
        }
    }

    fn transition(&self, f: impl FnOnce(CalendarState) -> CalendarState) {
        self.state.update(|state| *state = f(state.clone()));
    }

    pub async fn load_month(self) {
        let month = self.state.with_untracked(|state| state.month);
        self.transition(CalendarState::start_loading);
        let (start, end) = (month.first_day(), month.last_day());
        match self.repository.get_value().calendar_range(start, end).await {
            Ok(items) => self.transition(|state| state.month_loaded(month, items)),
            Err(err) => {
                log::warn!("Loading calendar for {} failed: {}", month.label(), err);
                self.transition(|state| state.month_failed(month, err));
            }
        }
    }

    pub async fn navigate(self, delta: i32) {
        self.transition(|state| state.navigate(delta));
        self.load_month().await;
    }

    pub async fn select_date(self, date: NaiveDate) {
        self.transition(|state| state.select(date));
        match self.repository.get_value().calendar_day(date).await {
            Ok(items) => self.transition(|state| state.day_loaded(date, items)),
            Err(err) => self.transition(|state| state.day_failed(date, err)),
        }
    }

    pub fn clear_selection(&self) {
        self.transition(CalendarState::clear_selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approved(id: i64, start: NaiveDate, end: NaiveDate) -> VacationRequest {
        VacationRequest {
            id,
            user_id: None,
            user_full_name: Some(format!("Employee {id}")),
            user_email: None,
            start_date: start,
            end_date: end,
            reason: None,
            status: VacationStatus::Approved,
            admin_comment: None,
            approved_by_name: None,
            approved_at: None,
            created_at: None,
            days_count: None,
        }
    }

    fn december() -> MonthCursor {
        MonthCursor::new(2024, 12).unwrap()
    }

    #[test]
    fn navigating_clears_selection_and_rolls_year() {
        let state = CalendarState::new(december())
            .month_loaded(december(), vec![approved(1, date(2024, 12, 2), date(2024, 12, 3))])
            .select(date(2024, 12, 2))
            .day_loaded(date(2024, 12, 2), vec![approved(1, date(2024, 12, 2), date(2024, 12, 3))]);
        assert_eq!(state.day_items.len(), 1);

        let next = state.navigate(1);
        assert_eq!(next.month, MonthCursor::new(2025, 1).unwrap());
        assert_eq!(next.range(), (date(2025, 1, 1), date(2025, 1, 31)));
        assert!(next.selected.is_none());
        assert!(next.day_items.is_empty());
        assert!(next.vacations.is_empty());
    }

    #[test]
    fn stale_month_response_is_discarded() {
        let state = CalendarState::new(december()).start_loading().navigate(1).start_loading();
        let state = state.month_loaded(
            december(),
            vec![approved(1, date(2024, 12, 2), date(2024, 12, 3))],
        );
        assert!(state.vacations.is_empty());
        assert!(state.loading);

        let state = state.month_failed(december(), ApiError::request_failed("offline"));
        assert!(state.error.is_none());
    }

    #[test]
    fn stale_day_response_is_discarded() {
        let state = CalendarState::new(december())
            .select(date(2024, 12, 2))
            .select(date(2024, 12, 5))
            .day_loaded(date(2024, 12, 2), vec![approved(1, date(2024, 12, 2), date(2024, 12, 2))]);
        assert!(state.day_items.is_empty());
        assert!(state.day_loading);
    }

    #[test]
    fn markers_include_only_approved_overlaps() {
        let mut pending = approved(3, date(2024, 12, 9), date(2024, 12, 9));
        pending.status = VacationStatus::Pending;
        let state = CalendarState::new(december()).month_loaded(
            december(),
            vec![
                approved(1, date(2024, 11, 28), date(2024, 12, 2)),
                approved(2, date(2024, 12, 2), date(2024, 12, 10)),
                pending,
            ],
        );
        let ids = |d| state.vacations_on(d).iter().map(|v| v.id).collect::<Vec<_>>();
        assert_eq!(ids(date(2024, 12, 1)), vec![1]);
        assert_eq!(ids(date(2024, 12, 2)), vec![1, 2]);
        assert_eq!(ids(date(2024, 12, 9)), vec![2]);
        assert!(ids(date(2024, 12, 11)).is_empty());
    }
}
