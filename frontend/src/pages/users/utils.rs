use thiserror::Error;

use crate::api::{ApiError, CreateUserRequest, Role};

pub const DEFAULT_TOTAL_DAYS: i32 = 26;
pub const MAX_TOTAL_DAYS: i32 = 365;
const NAME_LEN: std::ops::RangeInclusive<usize> = 2..=50;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub total_days: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Employee,
            total_days: DEFAULT_TOTAL_DAYS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserDraftError {
    #[error("First name must be between 2 and 50 characters")]
    FirstName,
    #[error("Last name must be between 2 and 50 characters")]
    LastName,
    #[error("Enter a valid email address")]
    Email,
    #[error("Password must be at least 6 characters")]
    Password,
    #[error("Vacation days must be a number between 0 and 365")]
    TotalDays,
}

impl From<UserDraftError> for ApiError {
    fn from(err: UserDraftError) -> Self {
        ApiError::validation(err.to_string())
    }
}

pub fn role_value(role: Role) -> &'static str {
    match role {
        Role::Admin => "ADMIN",
        Role::Employee => "EMPLOYEE",
    }
}

pub fn role_from_value(value: &str) -> Role {
    if value.eq_ignore_ascii_case("ADMIN") {
        Role::Admin
    } else {
        Role::Employee
    }
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}

impl UserDraft {
    pub fn validate(&self) -> Result<CreateUserRequest, UserDraftError> {
        let first_name = self.first_name.trim();
        if !NAME_LEN.contains(&first_name.chars().count()) {
            return Err(UserDraftError::FirstName);
        }
        let last_name = self.last_name.trim();
        if !NAME_LEN.contains(&last_name.chars().count()) {
            return Err(UserDraftError::LastName);
        }
        let email = self.email.trim();
        if !valid_email(email) {
            return Err(UserDraftError::Email);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(UserDraftError::Password);
        }
        let total_days = match self.total_days.trim() {
            "" => DEFAULT_TOTAL_DAYS,
            raw => raw
                .parse::<i32>()
                .ok()
                .filter(|days| (0..=MAX_TOTAL_DAYS).contains(days))
                .ok_or(UserDraftError::TotalDays)?,
        };
        Ok(CreateUserRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            role: self.role,
            total_vacation_days: total_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> UserDraft {
        UserDraft {
            first_name: "Ewa".into(),
            last_name: "Lis".into(),
            email: "ewa@example.com".into(),
            password: "secret1".into(),
            ..UserDraft::default()
        }
    }

    #[test]
    fn valid_draft_defaults_to_26_days() {
        let mut input = draft();
        input.total_days = String::new();
        let request = input.validate().unwrap();
        assert_eq!(request.total_vacation_days, 26);
        assert_eq!(request.role, Role::Employee);
        assert_eq!(draft().validate().unwrap().total_vacation_days, 26);
    }

    #[test]
    fn names_must_have_two_to_fifty_chars() {
        let mut input = draft();
        input.first_name = " E ".into();
        assert_eq!(input.validate(), Err(UserDraftError::FirstName));

        let mut input = draft();
        input.last_name = "x".repeat(51);
        assert_eq!(input.validate(), Err(UserDraftError::LastName));

        let mut input = draft();
        input.last_name = "x".repeat(50);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn email_and_password_are_checked() {
        let mut input = draft();
        input.email = "ewa.example.com".into();
        assert_eq!(input.validate(), Err(UserDraftError::Email));

        let mut input = draft();
        input.password = "12345".into();
        assert_eq!(input.validate(), Err(UserDraftError::Password));
    }

    #[test]
    fn role_values_match_backend_names() {
        assert_eq!(role_from_value(role_value(Role::Admin)), Role::Admin);
        assert_eq!(role_from_value("EMPLOYEE"), Role::Employee);
        assert_eq!(role_from_value("bogus"), Role::Employee);
    }

    #[test]
    fn total_days_must_fit_range() {
        for bad in ["-1", "366", "many"] {
            let mut input = draft();
            input.total_days = bad.into();
            assert_eq!(input.validate(), Err(UserDraftError::TotalDays), "{bad}");
        }
        let mut input = draft();
        input.total_days = "0".into();
        assert_eq!(input.validate().unwrap().total_vacation_days, 0);
        input.total_days = "365".into();
        assert_eq!(input.validate().unwrap().total_vacation_days, 365);
    }
}
