use crate::api::VacationRequest;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::pages::vacations::{
    components::{filter::VacationFilter, form::VacationForm, list::VacationList},
    repository::VacationsRepository,
    types::StatusFilter,
    view_model::{VacationFormViewModel, VacationListViewModel},
};
use crate::state::session::use_session;
use crate::utils::time::today;
use leptos::*;

/// Request table with the status filter and row actions. Bumping `refresh`
/// re-fetches the list.
#[component]
pub fn VacationListPanel(#[prop(into)] refresh: Signal<u32>) -> impl IntoView {
    let session = use_session();
    let vm = VacationListViewModel::new(VacationsRepository::new(session.api()));
    let viewer = Signal::derive(move || session.user());
    let show_employee = session.is_admin();

    create_effect(move |_| {
        let _ = refresh.get();
        spawn_local(vm.refresh());
    });

    let rejecting = create_rw_signal(None::<VacationRequest>);
    let reject_comment = create_rw_signal(String::new());
    let cancelling = create_rw_signal(None::<VacationRequest>);

    let on_approve = Callback::new(move |id: i64| spawn_local(vm.approve(id)));
    let on_reject = Callback::new(move |vacation: VacationRequest| {
        reject_comment.set(String::new());
        rejecting.set(Some(vacation));
    });
    let on_cancel = Callback::new(move |vacation: VacationRequest| cancelling.set(Some(vacation)));

    let confirm_reject = Callback::new(move |_: ()| {
        if let Some(vacation) = rejecting.get_untracked() {
            let comment = Some(reject_comment.get_untracked());
            rejecting.set(None);
            spawn_local(vm.reject(vacation.id, comment));
        }
    });
    let confirm_cancel = Callback::new(move |_: ()| {
        if let Some(vacation) = cancelling.get_untracked() {
            cancelling.set(None);
            spawn_local(vm.cancel(vacation.id));
        }
    });

    let filter = Signal::derive(move || vm.state.with(|state| state.filter));
    let loading = Signal::derive(move || vm.state.with(|state| state.loading));
    let error = Signal::derive(move || vm.state.with(|state| state.error.clone()));
    let empty_message =
        Signal::derive(move || vm.state.with(|state| state.filter.empty_message().to_string()));

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-fg">
                    {if show_employee { "All vacation requests" } else { "My vacation requests" }}
                </h2>
                <VacationFilter filter=filter on_change=Callback::new(move |value: StatusFilter| vm.set_filter(value)) />
            </div>
            <VacationList
                vacations=vm.visible()
                loading=loading
                error=error
                empty_message=empty_message
                viewer=viewer
                message=vm.message
                on_approve=on_approve
                on_reject=on_reject
                on_cancel=on_cancel
                show_employee=show_employee
            />
            <ConfirmDialog
                is_open=Signal::derive(move || rejecting.with(Option::is_some))
                title="Reject request".to_string()
                message=Signal::derive(move || {
                    rejecting
                        .get()
                        .map(|v| format!("Reject the request for {}?", v.period_label()))
                        .unwrap_or_default()
                })
                on_confirm=confirm_reject
                on_cancel=Callback::new(move |_| rejecting.set(None))
                confirm_label="Reject".to_string()
                destructive=true
            >
                <textarea
                    rows=3
                    class="block w-full border rounded px-2 py-1 text-sm"
                    placeholder="Comment for the employee (optional)"
                    prop:value=move || reject_comment.get()
                    on:input=move |ev| reject_comment.set(event_target_value(&ev))
                ></textarea>
            </ConfirmDialog>
            <ConfirmDialog
                is_open=Signal::derive(move || cancelling.with(Option::is_some))
                title="Cancel request".to_string()
                message=Signal::derive(move || {
                    cancelling
                        .get()
                        .map(|v| format!("Cancel the request for {}?", v.period_label()))
                        .unwrap_or_default()
                })
                on_confirm=confirm_cancel
                on_cancel=Callback::new(move |_| cancelling.set(None))
                confirm_label="Cancel request".to_string()
                cancel_label="Keep".to_string()
                destructive=true
            />
        </div>
    }
}

#[component]
pub fn VacationFormPanel(on_success: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let session = use_session();
    let vm = VacationFormViewModel::new(VacationsRepository::new(session.api()));
    let available_days = Signal::derive(move || {
        session
            .user()
            .map(|user| i64::from(user.available_vacation_days))
            .unwrap_or_default()
    });

    let on_submit = Callback::new(move |_: ()| {
        let available = available_days.get_untracked();
        spawn_local(async move {
            if vm.submit(today(), available).await {
                on_success.call(());
            }
        });
    });
    let cancel = Callback::new(move |_: ()| {
        vm.reset();
        on_cancel.call(());
    });

    view! {
        <VacationForm
            draft=vm.draft
            error=vm.error
            submitting=vm.submitting
            available_days=available_days
            on_submit=on_submit
            on_cancel=cancel
        />
    }
}
