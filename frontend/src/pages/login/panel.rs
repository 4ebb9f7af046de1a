use crate::{
    config::DASHBOARD_PATH,
    pages::login::{components::form::LoginForm, utils},
    state::session::use_session,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = create_action(move |(email, password): &(String, String)| {
        let email = email.clone();
        let password = password.clone();
        async move { session.login(email, password).await }
    });
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            set_error.set(Some(err));
        }
    });

    // Covers both a fresh login and a session restored on page load.
    create_effect(move |_| {
        if session.is_authenticated() {
            set_password.set(String::new());
            navigate(DASHBOARD_PATH, Default::default());
        }
    });

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if let Err(err) = utils::validate_credentials(&email, &password) {
            set_error.set(Some(err.to_string()));
            return;
        }
        set_error.set(None);
        login_action.dispatch((email, password));
    });

    view! {
        <LoginForm
            email=email
            password=password
            error=error
            pending=pending
            on_email_input=Callback::new(move |value: String| set_email.set(value))
            on_password_input=Callback::new(move |value: String| set_password.set(value))
            on_submit=handle_submit
        />
    }
}
