use crate::api::{ApiError, Role};
use crate::components::error::InlineErrorMessage;
use crate::pages::users::utils::{role_from_value, role_value, UserDraft};
use leptos::*;

#[component]
pub fn UserForm(
    draft: RwSignal<UserDraft>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let input_class = "mt-1 block w-full border rounded px-2 py-1";
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">{"New user"}</h3>
            <InlineErrorMessage error=error />
            <form
                class="grid grid-cols-1 md:grid-cols-2 gap-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <label class="block text-sm font-medium text-fg">
                    {"First name"}
                    <input
                        class=input_class
                        prop:value=move || draft.with(|d| d.first_name.clone())
                        on:input=move |ev| draft.update(|d| d.first_name = event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    {"Last name"}
                    <input
                        class=input_class
                        prop:value=move || draft.with(|d| d.last_name.clone())
                        on:input=move |ev| draft.update(|d| d.last_name = event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    {"Email"}
                    <input
                        type="email"
                        class=input_class
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    {"Password"}
                    <input
                        type="password"
                        class=input_class
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    {"Role"}
                    <select
                        class=input_class
                        prop:value=move || draft.with(|d| role_value(d.role))
                        on:change=move |ev| draft.update(|d| d.role = role_from_value(&event_target_value(&ev)))
                    >
                        <option value=role_value(Role::Employee)>{Role::Employee.label()}</option>
                        <option value=role_value(Role::Admin)>{Role::Admin.label()}</option>
                    </select>
                </label>
                <label class="block text-sm font-medium text-fg">
                    {"Vacation days per year"}
                    <input
                        type="number"
                        min="0"
                        max="365"
                        class=input_class
                        prop:value=move || draft.with(|d| d.total_days.clone())
                        on:input=move |ev| draft.update(|d| d.total_days = event_target_value(&ev))
                    />
                </label>
                <div class="md:col-span-2 flex gap-2">
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Create user" }}
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_prefills_default_allowance() {
        let html = render_to_string(|| {
            let draft = create_rw_signal(UserDraft::default());
            let error = create_rw_signal(Some(ApiError::validation("Enter a valid email address")));
            let saving = create_rw_signal(false);
            view! {
                <UserForm
                    draft=draft
                    error=error
                    saving=saving
                    on_submit=Callback::new(|_| ())
                    on_cancel=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("Create user"));
        assert!(html.contains("Enter a valid email address"));
        assert!(html.contains("value=\"ADMIN\""));
    }
}
