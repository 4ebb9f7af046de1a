use crate::api::{SessionUser, VacationRequest, VacationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(VacationStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(VacationStatus::Pending),
        StatusFilter::Only(VacationStatus::Approved),
        StatusFilter::Only(VacationStatus::Rejected),
        StatusFilter::Only(VacationStatus::Cancelled),
    ];

    pub fn from_value(value: &str) -> Self {
        VacationStatus::parse(value)
            .map(StatusFilter::Only)
            .unwrap_or_default()
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status_label(*status),
        }
    }

    pub fn matches(&self, vacation: &VacationRequest) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => vacation.status == *status,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            StatusFilter::All => "No vacation requests yet",
            StatusFilter::Only(VacationStatus::Pending) => "No pending requests",
            StatusFilter::Only(VacationStatus::Approved) => "No approved requests",
            StatusFilter::Only(VacationStatus::Rejected) => "No rejected requests",
            StatusFilter::Only(VacationStatus::Cancelled) => "No cancelled requests",
        }
    }
}

pub fn status_label(status: VacationStatus) -> &'static str {
    match status {
        VacationStatus::Pending => "Pending",
        VacationStatus::Approved => "Approved",
        VacationStatus::Rejected => "Rejected",
        VacationStatus::Cancelled => "Cancelled",
    }
}

/// Buttons a viewer may use on one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub approve: bool,
    pub reject: bool,
    pub cancel: bool,
}

impl RowActions {
    pub fn for_viewer(vacation: &VacationRequest, viewer: Option<&SessionUser>) -> Self {
        let Some(viewer) = viewer else {
            return Self::default();
        };
        if vacation.status.is_terminal() {
            return Self::default();
        }
        let is_admin = viewer.is_admin();
        let is_owner = match vacation.user_email.as_deref() {
            Some(email) => email.eq_ignore_ascii_case(&viewer.email),
            // Non-admin listings only ever contain the viewer's own requests.
            None => !is_admin,
        };
        Self {
            approve: is_admin,
            reject: is_admin,
            cancel: is_owner,
        }
    }

    pub fn any(&self) -> bool {
        self.approve || self.reject || self.cancel
    }
}
