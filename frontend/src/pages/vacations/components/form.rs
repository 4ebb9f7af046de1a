use crate::api::ApiError;
use crate::components::error::InlineErrorMessage;
use crate::pages::vacations::utils::{preview, VacationDraft};
use leptos::*;

#[component]
pub fn VacationForm(
    draft: RwSignal<VacationDraft>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] available_days: Signal<i64>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let balance = Signal::derive(move || draft.with(|d| preview(d, available_days.get())));

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">{"New vacation request"}</h3>
                <p class="text-sm text-fg-muted">
                    {move || format!("Available days: {}", available_days.get())}
                </p>
            </div>
            <InlineErrorMessage error=error />
            <form
                class="space-y-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-fg" for="vacation-start">{"Start date"}</label>
                        <input
                            id="vacation-start"
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || draft.with(|d| d.start_date.clone())
                            on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg" for="vacation-end">{"End date"}</label>
                        <input
                            id="vacation-end"
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || draft.with(|d| d.end_date.clone())
                            on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg" for="vacation-reason">{"Reason (optional)"}</label>
                    <textarea
                        id="vacation-reason"
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || draft.with(|d| d.reason.clone())
                        on:input=move |ev| draft.update(|d| d.reason = event_target_value(&ev))
                    ></textarea>
                </div>
                {move || balance.get().map(|preview| {
                    let class = if preview.exceeds_balance() {
                        "text-sm text-status-error-text"
                    } else {
                        "text-sm text-fg-muted"
                    };
                    view! {
                        <p class=class data-testid="balance-preview">
                            {format!(
                                "Requested days: {} · Remaining after approval: {}",
                                preview.requested,
                                preview.remaining()
                            )}
                        </p>
                    }
                })}
                <div class="flex gap-2">
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Submit request" }}
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-surface-muted text-fg"
                        on:click=move |_| on_cancel.call(())
                    >
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </div>
    }
}
