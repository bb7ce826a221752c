use super::{
    repository::LoginRepository,
    utils::{login_error_message, validate_credentials},
};
use crate::{
    api::{AdminLoginRequest, ApiClient, ApiError},
    router::AppRoute,
    state::session::{use_session, Session},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

/// Exchanges credentials for a token and establishes the session with it.
pub async fn perform_login(
    repo: &LoginRepository,
    session: &Session,
    request: &AdminLoginRequest,
) -> Result<(), ApiError> {
    let response = repo.login(request).await?;
    session.establish(&response.access).map_err(|err| {
        log::error!("Could not persist admin session: {}", err);
        ApiError::unknown(err.to_string())
    })?;
    log::info!("Admin login succeeded");
    Ok(())
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub identifier: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<AdminLoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates the form and dispatches a login. Returns false when nothing was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match validate_credentials(&self.identifier.get_untracked(), &self.password.get_untracked())
        {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(message) => {
                self.error.set(Some(message));
                false
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));
    let session = use_session();

    let identifier = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let login_action = create_action(move |request: &AdminLoginRequest| {
        let repo = repo.clone();
        let session = session.clone();
        let request = request.clone();
        async move {
            let result = perform_login(&repo, &session, &request).await;
            match &result {
                Ok(()) => {
                    error.try_set(None);
                    password.try_set(String::new());
                }
                Err(err) => {
                    error.try_set(Some(login_error_message(err).to_string()));
                }
            }
            result
        }
    });

    create_effect(move |_| {
        if let Some(Ok(())) = login_action.value().get() {
            navigation::redirect_to(AppRoute::Dashboard);
        }
    });

    LoginViewModel {
        identifier,
        password,
        error,
        login_action,
    }
}
