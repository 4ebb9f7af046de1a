use crate::pages::dashboard::view_model::DashboardSection;
use leptos::*;

/// Shortcuts shown to administrators on the overview.
#[component]
pub fn AdminPanel(on_open: Callback<DashboardSection>) -> impl IntoView {
    let button = "px-4 py-3 rounded-md text-sm font-medium bg-surface-muted text-fg hover:bg-surface-elevated border border-border";
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-fg mb-4">{"Administrator panel"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <button type="button" class=button on:click=move |_| on_open.call(DashboardSection::Vacations)>
                    {"Requests awaiting approval"}
                </button>
                <button type="button" class=button on:click=move |_| on_open.call(DashboardSection::Users)>
                    {"All users"}
                </button>
                <button type="button" class=button on:click=move |_| on_open.call(DashboardSection::Calendar)>
                    {"Team calendar"}
                </button>
            </div>
        </div>
    }
}
