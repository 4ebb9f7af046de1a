#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::rc::Rc;

    use crate::api::{ApiClient, Role, SessionUser};
    use crate::state::session::{SessionContext, SessionState};
    use crate::utils::{navigation::MemoryNavigator, storage::MemoryTokenStore};
    use leptos::*;

    pub fn admin_user() -> SessionUser {
        SessionUser {
            token: "admin-token".into(),
            token_type: Some("Bearer".into()),
            email: "anna@example.com".into(),
            first_name: "Anna".into(),
            last_name: "Nowak".into(),
            role: Role::Admin,
            total_vacation_days: 26,
            used_vacation_days: 0,
            available_vacation_days: 26,
        }
    }

    pub fn employee_user(available_days: i32) -> SessionUser {
        SessionUser {
            token: "employee-token".into(),
            token_type: Some("Bearer".into()),
            email: "jan@example.com".into(),
            first_name: "Jan".into(),
            last_name: "Kowalski".into(),
            role: Role::Employee,
            total_vacation_days: 26,
            used_vacation_days: 26 - available_days,
            available_vacation_days: available_days,
        }
    }

    pub fn offline_client() -> ApiClient {
        ApiClient::with_parts(
            Some("http://127.0.0.1:9/api".into()),
            Rc::new(MemoryTokenStore::default()),
            Rc::new(MemoryNavigator::default()),
        )
    }

    pub fn provide_session_state(state: SessionState) -> SessionContext {
        let session = SessionContext::with_state(offline_client(), state);
        provide_context(session);
        session
    }

    pub fn provide_session(user: Option<SessionUser>) -> SessionContext {
        provide_session_state(SessionState {
            user,
            loading: false,
        })
    }
}
