use crate::api::VacationRequest;
use crate::pages::calendar::view_model::vacations_on;
use crate::utils::time::{month_grid, MonthCursor, WEEKDAY_LABELS};
use chrono::{Datelike, NaiveDate};
use leptos::*;

const MARKERS_PER_DAY: usize = 2;

#[component]
pub fn CalendarGrid(
    #[prop(into)] month: Signal<MonthCursor>,
    #[prop(into)] vacations: Signal<Vec<VacationRequest>>,
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    today: NaiveDate,
    on_select: Callback<NaiveDate>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-7 gap-px bg-border rounded-lg overflow-hidden">
            {WEEKDAY_LABELS
                .into_iter()
                .map(|label| view! {
                    <div class="bg-surface-muted px-2 py-1 text-center text-xs font-semibold text-fg-muted">{label}</div>
                })
                .collect_view()}
            {move || {
                vacations.with(|vacations| {
                    month_grid(month.get())
                        .into_iter()
                        .map(|cell| match cell {
                            None => view! { <div class="bg-surface-muted min-h-[5rem]"></div> }.into_view(),
                            Some(date) => day_cell(
                                date,
                                vacations_on(vacations, date),
                                selected,
                                date == today,
                                on_select,
                            ),
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

fn day_cell(
    date: NaiveDate,
    vacations: Vec<VacationRequest>,
    selected: Signal<Option<NaiveDate>>,
    is_today: bool,
    on_select: Callback<NaiveDate>,
) -> View {
    let hidden = vacations.len().saturating_sub(MARKERS_PER_DAY);
    let class = move || {
        let mut class = String::from("bg-surface-elevated min-h-[5rem] p-1 text-left align-top cursor-pointer hover:bg-surface-muted");
        if selected.get() == Some(date) {
            class.push_str(" ring-2 ring-action-primary-bg");
        }
        class
    };
    let number_class = if is_today {
        "text-xs font-bold text-action-primary-bg"
    } else {
        "text-xs text-fg"
    };
    view! {
        <button type="button" class=class data-date=date.to_string() on:click=move |_| on_select.call(date)>
            <span class=number_class>{date.day()}</span>
            <div class="mt-1 space-y-0.5">
                {vacations
                    .into_iter()
                    .take(MARKERS_PER_DAY)
                    .map(|vacation| view! {
                        <div class="truncate rounded bg-status-success-bg px-1 text-[10px] text-status-success-text">
                            {vacation.user_full_name.unwrap_or_else(|| "Vacation".into())}
                        </div>
                    })
                    .collect_view()}
                {(hidden > 0).then(|| view! {
                    <div class="text-[10px] text-fg-muted">{format!("+{} more", hidden)}</div>
                })}
            </div>
        </button>
    }
    .into_view()
}
