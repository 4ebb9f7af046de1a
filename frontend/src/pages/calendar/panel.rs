use crate::components::{error::InlineErrorMessage, layout::LoadingSpinner};
use crate::pages::calendar::{
    components::{day_details::DayDetails, grid::CalendarGrid},
    view_model::CalendarViewModel,
};
use crate::pages::vacations::repository::VacationsRepository;
use crate::state::session::use_session;
use crate::utils::time::{today, MonthCursor};
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn CalendarPanel(#[prop(optional)] initial_month: Option<MonthCursor>) -> impl IntoView {
    let session = use_session();
    let vm = CalendarViewModel::new(
        VacationsRepository::new(session.api()),
        initial_month.unwrap_or_else(MonthCursor::current),
    );

    create_effect(move |_| spawn_local(vm.load_month()));

    let state = vm.state;
    let month = Signal::derive(move || state.with(|s| s.month));
    let vacations = Signal::derive(move || state.with(|s| s.vacations.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    let on_select = Callback::new(move |date: NaiveDate| spawn_local(vm.select_date(date)));

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <button
                    type="button"
                    class="px-3 py-1 rounded bg-surface-muted text-fg"
                    aria-label="Previous month"
                    on:click=move |_| spawn_local(vm.navigate(-1))
                >
                    {"‹"}
                </button>
                <h2 class="text-xl font-semibold text-fg">{move || month.get().label()}</h2>
                <button
                    type="button"
                    class="px-3 py-1 rounded bg-surface-muted text-fg"
                    aria-label="Next month"
                    on:click=move |_| spawn_local(vm.navigate(1))
                >
                    {"›"}
                </button>
            </div>
            <InlineErrorMessage error=error />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <CalendarGrid
                month=month
                vacations=vacations
                selected=selected
                today=today()
                on_select=on_select
            />
            <DayDetails
                date=selected
                items=Signal::derive(move || state.with(|s| s.day_items.clone()))
                loading=Signal::derive(move || state.with(|s| s.day_loading))
                error=Signal::derive(move || state.with(|s| s.day_error.clone()))
                on_close=Callback::new(move |_| vm.clear_selection())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{employee_user, provide_session},
        ssr::render_to_string,
    };

    #[test]
    fn panel_shows_month_label_and_navigation() {
        let html = render_to_string(|| {
            provide_session(Some(employee_user(10)));
            view! { <CalendarPanel initial_month=MonthCursor::new(2025, 3).unwrap() /> }
        });
        assert!(html.contains("March 2025"));
        assert!(html.contains("Previous month"));
        assert!(html.contains("Next month"));
        assert!(html.contains("data-date=\"2025-03-31\""));
    }
}
