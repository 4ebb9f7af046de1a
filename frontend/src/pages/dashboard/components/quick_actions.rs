use crate::pages::dashboard::view_model::DashboardSection;
use leptos::*;

#[component]
pub fn QuickActions(
    is_admin: bool,
    on_new_request: Callback<()>,
    on_open: Callback<DashboardSection>,
) -> impl IntoView {
    let button = "px-4 py-3 rounded-md text-sm font-medium text-action-primary-text";
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-fg mb-4">{"Quick actions"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <button type="button" class=format!("{button} bg-action-primary-bg") on:click=move |_| on_new_request.call(())>
                    {"New vacation request"}
                </button>
                <button type="button" class=format!("{button} bg-status-success-text") on:click=move |_| on_open.call(DashboardSection::Vacations)>
                    {DashboardSection::Vacations.label(is_admin)}
                </button>
                <button type="button" class=format!("{button} bg-fg-muted") on:click=move |_| on_open.call(DashboardSection::Calendar)>
                    {"Vacation calendar"}
                </button>
                {is_admin.then(|| view! {
                    <button type="button" class=format!("{button} bg-status-warning-text") on:click=move |_| on_open.call(DashboardSection::Users)>
                        {"Manage users"}
                    </button>
                })}
            </div>
        </div>
    }
}
