use leptos::*;

use crate::api::{ApiClient, ApiError, LoginRequest, Role, ServerErrorBody, SessionUser};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }

    pub fn is_employee(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role == Role::Employee)
    }
}

/// Owner of the active identity and the only writer of the persisted token.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    api: StoredValue<ApiClient>,
}

impl SessionContext {
    pub fn new(api: ApiClient) -> Self {
        let pending_restore = api.token_store().get().is_some();
        Self {
            state: create_rw_signal(SessionState {
                user: None,
                loading: pending_restore,
            }),
            api: store_value(api),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(api: ApiClient, state: SessionState) -> Self {
        Self {
            state: create_rw_signal(state),
            api: store_value(api),
        }
    }

    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.with(|state| state.user.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(SessionState::is_admin)
    }

    pub fn is_employee(&self) -> bool {
        self.state.with(SessionState::is_employee)
    }

    pub async fn login(self, email: String, password: String) -> Result<SessionUser, String> {
        let api = self.api();
        self.state.update(|state| state.loading = true);

        let user = match api.login(&LoginRequest { email, password }).await {
            Ok(user) => user,
            Err(err) => {
                self.state.update(|state| state.loading = false);
                return Err(login_failure_message(&err));
            }
        };
        if let Err(err) = api.token_store().set(&user.token) {
            log::error!("Could not persist session token: {}", err);
            self.state.update(|state| state.loading = false);
            return Err(err);
        }

        log::info!("Signed in as {}", user.email);
        self.state.set(SessionState {
            user: Some(user.clone()),
            loading: false,
        });
        Ok(user)
    }

    pub fn logout(&self) {
        self.api.with_value(|api| api.token_store().clear());
        self.state.set(SessionState::default());
        log::info!("Signed out");
    }

    /// Adopts the identity behind a persisted token, or discards the token.
    /// Failures are logged and never surfaced.
    pub async fn restore_session(self) {
        let api = self.api();
        let tokens = api.token_store();
        let Some(token) = tokens.get() else {
            self.state.set(SessionState::default());
            return;
        };

        self.state.update(|state| state.loading = true);
        match api.validate_token(&token).await {
            Ok(user) => {
                if let Err(err) = tokens.set(&user.token) {
                    log::warn!("Could not re-persist session token: {}", err);
                }
                log::info!("Restored session for {}", user.email);
                self.state.set(SessionState {
                    user: Some(user),
                    loading: false,
                });
            }
            Err(err) => {
                log::warn!("Discarding stored session: {}", err);
                tokens.clear();
                self.state.set(SessionState::default());
            }
        }
    }
}

fn login_failure_message(err: &ApiError) -> String {
    match err.code.as_str() {
        "REQUEST_FAILED" | "TIMEOUT" => err.error.clone(),
        _ => err
            .details
            .clone()
            .and_then(|details| serde_json::from_value::<ServerErrorBody>(details).ok())
            .and_then(|body| body.human_message())
            .unwrap_or_else(|| "Login failed".to_string()),
    }
}

#[component]
pub fn SessionProvider(
    #[prop(optional)] api: Option<ApiClient>,
    children: Children,
) -> impl IntoView {
    let api = api
        .or_else(use_context::<ApiClient>)
        .unwrap_or_else(ApiClient::new);
    let session = SessionContext::new(api);
    provide_context(session);

    create_effect(move |_| {
        spawn_local(async move {
            session.restore_session().await;
        });
    });

    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(ApiClient::new()))
}
