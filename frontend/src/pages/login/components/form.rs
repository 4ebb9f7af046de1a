use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {"Vacation Tracker"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {"Sign in to manage your leave"}
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">{"Email"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="username"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-t-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Email"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    on_email_input.call(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-b-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    on_password_input.call(target.value());
                                }
                            />
                        </div>
                    </div>

                    <Show when=move || error.get().is_some() fallback=|| ()>
                        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(error: Option<&'static str>, pending: bool) -> String {
        render_to_string(move || {
            view! {
                <LoginForm
                    email=Signal::derive(|| "jan@example.com".to_string())
                    password=Signal::derive(String::new)
                    error=Signal::derive(move || error.map(str::to_string))
                    pending=Signal::derive(move || pending)
                    on_email_input=Callback::new(|_| {})
                    on_password_input=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn login_form_renders_fields_and_error() {
        let html = render(Some("Invalid email or password"), false);
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(html.contains("Invalid email or password"));
        assert!(html.contains("Sign in"));
    }

    #[test]
    fn login_form_shows_pending_label() {
        let html = render(None, true);
        assert!(html.contains("Signing in..."));
        assert!(!html.contains("role=\"alert\""));
    }
}
