use leptos::*;

use crate::api::{ApiError, UserSummary};
use crate::pages::users::{repository::UsersRepository, utils::UserDraft};
use crate::pages::vacations::utils::MessageState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectoryState {
    pub users: Vec<UserSummary>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub state: RwSignal<UserDirectoryState>,
    pub message: RwSignal<MessageState>,
    pub draft: RwSignal<UserDraft>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub form_open: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    repository: StoredValue<UsersRepository>,
}

impl UsersViewModel {
    pub fn new(repository: UsersRepository) -> Self {
        Self {
            state: create_rw_signal(UserDirectoryState {
                loading: true,
                ..Default::default()
            }),
            message: create_rw_signal(MessageState::default()),
            draft: create_rw_signal(UserDraft::default()),
            form_error: create_rw_signal(None),
            form_open: create_rw_signal(false),
            saving: create_rw_signal(false),
            repository: store_value(repository),
        }
    }

    pub async fn refresh(self) {
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });
        let result = self.repository.get_value().list().await;
        self.state.update(|state| {
            state.loading = false;
            match result {
                Ok(users) => state.users = users,
                Err(err) => {
                    log::warn!("Loading users failed: {}", err);
                    state.users.clear();
                    state.error = (!err.is_unauthorized()).then_some(err);
                }
            }
        });
    }

    pub fn open_form(&self) {
        self.draft.set(UserDraft::default());
        self.form_error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.form_error.set(None);
    }

    /// Returns `true` when the user was created and the list re-fetched.
    pub async fn create(self) -> bool {
        let payload = match self.draft.with_untracked(UserDraft::validate) {
            Ok(payload) => payload,
            Err(err) => {
                self.form_error.set(Some(err.into()));
                return false;
            }
        };
        self.form_error.set(None);
        self.saving.set(true);
        let result = self.repository.get_value().create(payload).await;
        self.saving.set(false);
        match result {
            Ok(message) => {
                self.message
                    .update(|msg| msg.set_success(message.unwrap_or_else(|| "User created".into())));
                self.form_open.set(false);
                self.draft.set(UserDraft::default());
                self.refresh().await;
                true
            }
            Err(err) => {
                if !err.is_unauthorized() {
                    self.form_error.set(Some(err));
                }
                false
            }
        }
    }

    pub async fn toggle_status(self, id: i64) {
        match self.repository.get_value().toggle_status(id).await {
            Ok(message) => {
                self.message.update(|msg| {
                    msg.set_success(message.unwrap_or_else(|| "User status updated".into()))
                });
                self.refresh().await;
            }
            Err(err) if err.is_unauthorized() => {}
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}
