use crate::{
    components::layout::LoadingSpinner,
    config::{DASHBOARD_PATH, LOGIN_PATH},
    state::session::{use_session, SessionState},
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let is_authenticated = create_memo(move |_| state.with(SessionState::is_authenticated));
    let is_loading = create_memo(move |_| state.with(|s| s.loading));
    create_effect(move |_| {
        if let Some(target) = redirect_target(&state.get(), false) {
            session.api().navigator().navigate(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let is_authenticated = create_memo(move |_| state.with(SessionState::is_authenticated));
    let is_loading = create_memo(move |_| state.with(|s| s.loading));
    let is_admin = create_memo(move |_| state.with(SessionState::is_admin));
    create_effect(move |_| {
        if let Some(target) = redirect_target(&state.get(), true) {
            session.api().navigator().navigate(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

fn redirect_target(state: &SessionState, admin_only: bool) -> Option<&'static str> {
    if state.loading {
        None
    } else if !state.is_authenticated() {
        Some(LOGIN_PATH)
    } else if admin_only && !state.is_admin() {
        Some(DASHBOARD_PATH)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, employee_user};

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn admin_guard_blocks_non_admins() {
        assert!(!should_render_admin_children(false, true, false));
        assert!(!should_render_admin_children(false, false, true));
        assert!(!should_render_admin_children(true, true, true));
        assert!(!should_render_admin_children(true, false, false));
        assert!(should_render_admin_children(true, false, true));
    }

    #[test]
    fn redirect_waits_for_restore_and_routes_by_role() {
        let loading = SessionState {
            user: None,
            loading: true,
        };
        assert_eq!(redirect_target(&loading, false), None);
        assert_eq!(
            redirect_target(&SessionState::default(), false),
            Some(LOGIN_PATH)
        );

        let employee = SessionState {
            user: Some(employee_user(26)),
            loading: false,
        };
        assert_eq!(redirect_target(&employee, false), None);
        assert_eq!(redirect_target(&employee, true), Some(DASHBOARD_PATH));

        let admin = SessionState {
            user: Some(admin_user()),
            loading: false,
        };
        assert_eq!(redirect_target(&admin, true), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::state::session::SessionState;
    use crate::test_support::helpers::{
        admin_user, employee_user, provide_session, provide_session_state,
    };
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user(26)));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_session(None);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_restoring() {
        let html = render_to_string(move || {
            provide_session_state(SessionState {
                user: None,
                loading: true,
            });
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_renders_children_for_admin_user() {
        let html = render_to_string(move || {
            provide_session(Some(admin_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-content"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-content"));
    }

    #[test]
    fn require_admin_hides_children_for_employee() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user(26)));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-content"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-content"));
    }
}
