use crate::api::{ApiError, SessionUser, VacationRequest};
use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, SuccessMessage},
};
use crate::pages::vacations::{
    components::status_badge::StatusBadge,
    types::RowActions,
    utils::MessageState,
};
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn VacationList(
    #[prop(into)] vacations: Signal<Vec<VacationRequest>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] empty_message: Signal<String>,
    #[prop(into)] viewer: Signal<Option<SessionUser>>,
    message: RwSignal<MessageState>,
    on_approve: Callback<i64>,
    on_reject: Callback<VacationRequest>,
    on_cancel: Callback<VacationRequest>,
    #[prop(optional)] show_employee: bool,
) -> impl IntoView {
    let message_error = Signal::derive(move || message.get().error);
    let message_success = Signal::derive(move || message.get().success.unwrap_or_default());
    view! {
        <div class="bg-surface-elevated shadow rounded-lg">
            <InlineErrorMessage error=message_error />
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message=message_success />
            </Show>
            <InlineErrorMessage error=error />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && vacations.with(Vec::is_empty)>
                <EmptyState title=Signal::derive(move || empty_message.get()) />
            </Show>
            <Show when=move || !loading.get() && !vacations.with(Vec::is_empty)>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                {show_employee.then(|| view! {
                                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Employee"}</th>
                                })}
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Period"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Days"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Reason"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Status"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Submitted"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || vacations.get()
                                key=|vacation| (vacation.id, vacation.status)
                                children=move |vacation: VacationRequest| {
                                    let actions = viewer.with_untracked(|viewer| {
                                        RowActions::for_viewer(&vacation, viewer.as_ref())
                                    });
                                    let id = vacation.id;
                                    let employee = vacation
                                        .user_full_name
                                        .clone()
                                        .unwrap_or_else(|| "-".into());
                                    let days = vacation
                                        .days_count
                                        .map(|days| days.to_string())
                                        .unwrap_or_else(|| "-".into());
                                    let reason = vacation.reason.clone().unwrap_or_else(|| "-".into());
                                    let submitted = vacation
                                        .created_at
                                        .as_ref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".into());
                                    let decision_note = vacation.admin_comment.clone();
                                    let status = vacation.status;
                                    let row = store_value(vacation.clone());
                                    view! {
                                        <tr data-vacation-id=id>
                                            {show_employee.then(|| view! {
                                                <td class="px-4 py-3 whitespace-nowrap text-sm text-fg">{employee}</td>
                                            })}
                                            <td class="px-4 py-3 whitespace-nowrap text-sm text-fg">{vacation.period_label()}</td>
                                            <td class="px-4 py-3 whitespace-nowrap text-sm text-fg">{days}</td>
                                            <td class="px-4 py-3 text-sm text-fg">{reason}</td>
                                            <td class="px-4 py-3 whitespace-nowrap text-sm">
                                                <StatusBadge status=status />
                                                {decision_note.map(|note| view! {
                                                    <p class="mt-1 text-xs text-fg-muted">{note}</p>
                                                })}
                                            </td>
                                            <td class="px-4 py-3 whitespace-nowrap text-sm text-fg">{submitted}</td>
                                            <td class="px-4 py-3 whitespace-nowrap text-sm">
                                                {if actions.any() {
                                                    view! {
                                                        <div class="flex gap-2">
                                                            {actions.approve.then(|| view! {
                                                                <button
                                                                    class="text-status-success-text hover:underline"
                                                                    on:click=move |_| on_approve.call(id)
                                                                >
                                                                    {"Approve"}
                                                                </button>
                                                            })}
                                                            {actions.reject.then(|| view! {
                                                                <button
                                                                    class="text-status-error-text hover:underline"
                                                                    on:click=move |_| on_reject.call(row.get_value())
                                                                >
                                                                    {"Reject"}
                                                                </button>
                                                            })}
                                                            {actions.cancel.then(|| view! {
                                                                <button
                                                                    class="text-fg-muted hover:underline"
                                                                    on:click=move |_| on_cancel.call(row.get_value())
                                                                >
                                                                    {"Cancel"}
                                                                </button>
                                                            })}
                                                        </div>
                                                    }
                                                    .into_view()
                                                } else {
                                                    view! { <span class="text-fg-muted">{"-"}</span> }.into_view()
                                                }}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
