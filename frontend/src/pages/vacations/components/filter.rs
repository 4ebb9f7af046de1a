use crate::pages::vacations::types::StatusFilter;
use leptos::*;

#[component]
pub fn VacationFilter(
    #[prop(into)] filter: Signal<StatusFilter>,
    on_change: Callback<StatusFilter>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <label class="text-sm text-fg-muted" for="vacation-status-filter">{"Status"}</label>
            <select
                id="vacation-status-filter"
                class="border rounded px-2 py-1 text-sm"
                prop:value=move || filter.get().as_value()
                on:change=move |ev| on_change.call(StatusFilter::from_value(&event_target_value(&ev)))
            >
                {StatusFilter::OPTIONS
                    .into_iter()
                    .map(|option| {
                        view! { <option value=option.as_value()>{option.label()}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
