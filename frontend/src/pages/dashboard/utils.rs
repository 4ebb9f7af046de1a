use crate::api::SessionUser;

pub fn greeting(user: &SessionUser) -> String {
    format!(
        "Welcome, {} {} ({})",
        user.first_name,
        user.last_name,
        user.role.label()
    )
}

pub fn days_label(days: i32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}
