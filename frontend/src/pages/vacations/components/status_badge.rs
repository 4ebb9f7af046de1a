use crate::api::VacationStatus;
use crate::pages::vacations::types::status_label;
use leptos::*;

pub fn status_badge_class(status: VacationStatus) -> &'static str {
    match status {
        VacationStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        VacationStatus::Approved => "bg-status-success-bg text-status-success-text",
        VacationStatus::Rejected => "bg-status-error-bg text-status-error-text",
        VacationStatus::Cancelled => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn StatusBadge(status: VacationStatus) -> impl IntoView {
    let class = format!(
        "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-semibold {}",
        status_badge_class(status)
    );
    view! { <span class=class data-status=status.as_str()>{status_label(status)}</span> }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badge_renders_label_and_status() {
        let html = render_to_string(|| view! { <StatusBadge status=VacationStatus::Rejected/> });
        assert!(html.contains("Rejected"));
        assert!(html.contains("data-status=\"REJECTED\""));
    }
}
