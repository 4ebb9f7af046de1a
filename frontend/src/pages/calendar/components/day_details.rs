use crate::api::{ApiError, VacationRequest};
use crate::components::{error::InlineErrorMessage, layout::LoadingSpinner};
use crate::pages::vacations::components::status_badge::StatusBadge;
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn DayDetails(
    #[prop(into)] date: Signal<Option<NaiveDate>>,
    #[prop(into)] items: Signal<Vec<VacationRequest>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || date.get().is_some()>
            <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
                <div class="flex items-center justify-between">
                    <h3 class="text-sm font-semibold text-fg">
                        {move || date.get().map(|d| format!("Requests on {}", d.format("%Y-%m-%d"))).unwrap_or_default()}
                    </h3>
                    <button type="button" class="text-fg-muted hover:text-fg" aria-label="Close" on:click=move |_| on_close.call(())>
                        {"✕"}
                    </button>
                </div>
                <InlineErrorMessage error=error />
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <Show
                        when=move || !items.with(Vec::is_empty)
                        fallback=|| view! { <p class="text-sm text-fg-muted">{"Nobody is away on this day"}</p> }
                    >
                        <ul class="divide-y divide-border">
                            <For
                                each=move || items.get()
                                key=|vacation| vacation.id
                                children=|vacation: VacationRequest| view! {
                                    <li class="py-2 flex items-center justify-between gap-2">
                                        <div>
                                            <p class="text-sm text-fg">
                                                {vacation.user_full_name.clone().unwrap_or_else(|| "-".into())}
                                            </p>
                                            <p class="text-xs text-fg-muted">{vacation.period_label()}</p>
                                        </div>
                                        <StatusBadge status=vacation.status />
                                    </li>
                                }
                            />
                        </ul>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::VacationStatus;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn details_list_people_away() {
        let html = render_to_string(|| {
            let date = create_rw_signal(NaiveDate::from_ymd_opt(2024, 12, 2));
            let items = create_rw_signal(vec![VacationRequest {
                id: 1,
                user_id: None,
                user_full_name: Some("Ewa Lis".into()),
                user_email: None,
                start_date: NaiveDate::from_ymd_opt(2024, 12, 2).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(),
                reason: None,
                status: VacationStatus::Approved,
                admin_comment: None,
                approved_by_name: None,
                approved_at: None,
                created_at: None,
                days_count: Some(2),
            }]);
            let loading = create_rw_signal(false);
            let error = create_rw_signal(None::<ApiError>);
            view! {
                <DayDetails date=date items=items loading=loading error=error on_close=Callback::new(|_| ()) />
            }
        });
        assert!(html.contains("Requests on 2024-12-02"));
        assert!(html.contains("Ewa Lis"));
        assert!(html.contains("Approved"));
    }

    #[test]
    fn details_hidden_without_selection() {
        let html = render_to_string(|| {
            let date = create_rw_signal(None::<NaiveDate>);
            let items = create_rw_signal(Vec::<VacationRequest>::new());
            let loading = create_rw_signal(false);
            let error = create_rw_signal(None::<ApiError>);
            view! {
                <DayDetails date=date items=items loading=loading error=error on_close=Callback::new(|_| ()) />
            }
        });
        assert!(!html.contains("Requests on"));
    }
}
