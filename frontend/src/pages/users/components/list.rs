use crate::api::UserSummary;
use leptos::*;

fn days_cell(value: Option<i32>) -> String {
    value.map(|days| days.to_string()).unwrap_or_else(|| "-".into())
}

#[component]
pub fn UserTable(
    #[prop(into)] users: Signal<Vec<UserSummary>>,
    on_toggle: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Name"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Email"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Role"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Days (available / used / total)"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Status"}</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || users.get()
                        key=|user| (user.id, user.is_active())
                        children=move |user: UserSummary| {
                            let id = user.id;
                            let active = user.is_active();
                            view! {
                                <tr data-user-id=id>
                                    <td class="px-4 py-3 text-sm text-fg">{user.full_name()}</td>
                                    <td class="px-4 py-3 text-sm text-fg">{user.email.clone()}</td>
                                    <td class="px-4 py-3 text-sm text-fg">{user.role.label()}</td>
                                    <td class="px-4 py-3 text-sm text-fg">
                                        <span data-days="available">{days_cell(user.available_vacation_days)}</span>
                                        {" / "}
                                        <span data-days="used">{days_cell(user.used_vacation_days)}</span>
                                        {" / "}
                                        <span data-days="total">{days_cell(user.total_vacation_days)}</span>
                                    </td>
                                    <td class="px-4 py-3 text-sm">
                                        {if active {
                                            view! { <span class="text-status-success-text">{"Active"}</span> }
                                        } else {
                                            view! { <span class="text-fg-muted">{"Inactive"}</span> }
                                        }}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-right">
                                        <button
                                            type="button"
                                            class="text-action-primary-bg hover:underline"
                                            on:click=move |_| on_toggle.call(id)
                                        >
                                            {if active { "Deactivate" } else { "Activate" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
