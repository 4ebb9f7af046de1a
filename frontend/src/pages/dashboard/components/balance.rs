use crate::api::SessionUser;
use crate::components::layout::StatCard;
use crate::pages::dashboard::utils::days_label;
use leptos::*;

#[component]
pub fn BalanceCards(#[prop(into)] user: Signal<Option<SessionUser>>) -> impl IntoView {
    let days = move |pick: fn(&SessionUser) -> i32| {
        Signal::derive(move || {
            user.with(|user| user.as_ref().map(|u| days_label(pick(u))).unwrap_or_default())
        })
    };
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard label="Available vacation days" value=days(|u| u.available_vacation_days) accent="border-l-4 border-l-action-primary-bg" />
            <StatCard label="Used vacation days" value=days(|u| u.used_vacation_days) accent="border-l-4 border-l-status-success-border" />
            <StatCard label="Total vacation days" value=days(|u| u.total_vacation_days) />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee_user, ssr::render_to_string};

    #[test]
    fn cards_show_three_balances() {
        let html = render_to_string(|| {
            let user = create_rw_signal(Some(employee_user(20)));
            view! { <BalanceCards user=user /> }
        });
        assert!(html.contains("20 days"));
        assert!(html.contains("6 days"));
        assert!(html.contains("26 days"));
    }
}
