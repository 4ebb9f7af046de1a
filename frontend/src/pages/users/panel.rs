use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, SuccessMessage},
};
use crate::pages::users::{
    components::{form::UserForm, list::UserTable},
    repository::UsersRepository,
    view_model::UsersViewModel,
};
use crate::state::session::use_session;
use leptos::*;

#[component]
pub fn UsersPanel() -> impl IntoView {
    let session = use_session();
    let vm = UsersViewModel::new(UsersRepository::new(session.api()));

    create_effect(move |_| spawn_local(vm.refresh()));

    let users = Signal::derive(move || vm.state.with(|s| s.users.clone()));
    let loading = Signal::derive(move || vm.state.with(|s| s.loading));
    let error = Signal::derive(move || vm.state.with(|s| s.error.clone()));
    let message_error = Signal::derive(move || vm.message.with(|m| m.error.clone()));

    let on_submit = Callback::new(move |_: ()| {
        spawn_local(async move {
            vm.create().await;
        })
    });

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-fg">{"Users"}</h2>
                <Show when=move || !vm.form_open.get()>
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                        on:click=move |_| vm.open_form()
                    >
                        {"Add user"}
                    </button>
                </Show>
            </div>
            <Show when=move || vm.form_open.get()>
                <UserForm
                    draft=vm.draft
                    error=vm.form_error
                    saving=vm.saving
                    on_submit=on_submit
                    on_cancel=Callback::new(move |_| vm.close_form())
                />
            </Show>
            <InlineErrorMessage error=message_error />
            <Show when=move || vm.message.with(|m| m.success.is_some())>
                <SuccessMessage message=Signal::derive(move || vm.message.with(|m| m.success.clone().unwrap_or_default())) />
            </Show>
            <InlineErrorMessage error=error />
            <div class="bg-surface-elevated shadow rounded-lg">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <Show
                        when=move || !users.with(Vec::is_empty)
                        fallback=move || view! {
                            <Show when=move || error.get().is_none()>
                                <EmptyState title="No users yet".to_string() />
                            </Show>
                        }
                    >
                        <UserTable
                            users=users
                            on_toggle=Callback::new(move |id: i64| spawn_local(vm.toggle_status(id)))
                        />
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_user, provide_session},
        ssr::render_to_string,
    };

    #[test]
    fn panel_starts_in_loading_state() {
        let html = render_to_string(|| {
            provide_session(Some(admin_user()));
            view! { <UsersPanel /> }
        });
        assert!(html.contains("Users"));
        assert!(html.contains("Add user"));
        assert!(html.contains("animate-spin"));
    }
}
