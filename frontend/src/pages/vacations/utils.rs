use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    api::{ApiError, CreateVacationRequest},
    utils::time::{count_days, parse_date},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Raw form input, kept as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacationDraft {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl VacationDraft {
    pub fn new(start_date: &str, end_date: &str, reason: &str) -> Self {
        Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((parse_date(&self.start_date)?, parse_date(&self.end_date)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecheckError {
    #[error("Select both a start date and an end date")]
    MissingDates,
    #[error("Dates must use the YYYY-MM-DD format")]
    InvalidDate,
    #[error("The start date cannot be after the end date")]
    StartAfterEnd,
    #[error("The start date cannot be in the past")]
    StartInPast,
    #[error("Not enough vacation days: requested {requested}, available {available}")]
    InsufficientBalance { requested: i64, available: i64 },
}

impl From<PrecheckError> for ApiError {
    fn from(err: PrecheckError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Local checks run before a request is sent; the backend repeats them.
pub fn precheck(
    draft: &VacationDraft,
    today: NaiveDate,
    available_days: i64,
) -> Result<CreateVacationRequest, PrecheckError> {
    if draft.start_date.trim().is_empty() || draft.end_date.trim().is_empty() {
        return Err(PrecheckError::MissingDates);
    }
    let (start, end) = draft.dates().ok_or(PrecheckError::InvalidDate)?;
    if start > end {
        return Err(PrecheckError::StartAfterEnd);
    }
    if start < today {
        return Err(PrecheckError::StartInPast);
    }
    let requested = count_days(start, end);
    if requested > available_days {
        return Err(PrecheckError::InsufficientBalance {
            requested,
            available: available_days,
        });
    }
    let reason = draft.reason.trim();
    Ok(CreateVacationRequest {
        start_date: start,
        end_date: end,
        reason: (!reason.is_empty()).then(|| reason.to_string()),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancePreview {
    pub requested: i64,
    pub available: i64,
}

impl BalancePreview {
    pub fn remaining(&self) -> i64 {
        self.available - self.requested
    }

    pub fn exceeds_balance(&self) -> bool {
        self.remaining() < 0
    }
}

/// Shown while typing once both dates parse and are in order.
pub fn preview(draft: &VacationDraft, available_days: i64) -> Option<BalancePreview> {
    let (start, end) = draft.dates()?;
    (start <= end).then(|| BalancePreview {
        requested: count_days(start, end),
        available: available_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn precheck_accepts_range_within_balance() {
        let draft = VacationDraft::new("2024-06-10", "2024-06-12", "  Family trip ");
        let request = precheck(&draft, today(), 3).unwrap();
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
        assert_eq!(request.reason.as_deref(), Some("Family trip"));
    }

    #[test]
    fn precheck_counts_days_inclusively() {
        let draft = VacationDraft::new("2024-06-10", "2024-06-12", "");
        assert_eq!(
            precheck(&draft, today(), 2),
            Err(PrecheckError::InsufficientBalance {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(preview(&draft, 2).map(|p| p.requested), Some(3));
    }

    #[test]
    fn precheck_rejects_reversed_range() {
        let draft = VacationDraft::new("2024-06-12", "2024-06-10", "");
        assert_eq!(precheck(&draft, today(), 26), Err(PrecheckError::StartAfterEnd));
        assert!(preview(&draft, 26).is_none());
    }

    #[test]
    fn precheck_rejects_start_before_today_but_allows_today() {
        let past = VacationDraft::new("2024-05-31", "2024-06-02", "");
        assert_eq!(precheck(&past, today(), 26), Err(PrecheckError::StartInPast));

        let same_day = VacationDraft::new("2024-06-01", "2024-06-01", "");
        let request = precheck(&same_day, today(), 1).unwrap();
        assert!(request.reason.is_none());
    }

    #[test]
    fn precheck_requires_well_formed_dates() {
        let missing = VacationDraft::new("2024-06-10", " ", "");
        assert_eq!(precheck(&missing, today(), 26), Err(PrecheckError::MissingDates));

        let garbled = VacationDraft::new("10/06/2024", "2024-06-12", "");
        assert_eq!(precheck(&garbled, today(), 26), Err(PrecheckError::InvalidDate));
    }

    #[test]
    fn precheck_error_becomes_validation_error() {
        let err: ApiError = PrecheckError::StartAfterEnd.into();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "The start date cannot be after the end date");
    }

    #[test]
    fn preview_reports_remaining_days() {
        let preview = preview(&VacationDraft::new("2024-06-10", "2024-06-14", ""), 4).unwrap();
        assert_eq!(preview.requested, 5);
        assert_eq!(preview.remaining(), -1);
        assert!(preview.exceeds_balance());
    }

    #[test]
    fn message_state_keeps_one_message() {
        let mut message = MessageState::default();
        message.set_error(ApiError::unknown("boom"));
        message.set_success("Saved");
        assert_eq!(message.success.as_deref(), Some("Saved"));
        assert!(message.error.is_none());
        message.clear();
        assert_eq!(message, MessageState::default());
    }
}
