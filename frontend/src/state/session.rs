use crate::{
    api::{ApiClient, CredentialHolder},
    config::TOKEN_STORAGE_KEY,
    router::AppRoute,
    utils::storage::{self as storage_utils, StorageError},
};
use leptos::*;
use std::{cell::RefCell, rc::Rc};

/// A single persisted slot holding the access token.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// Browser `localStorage` slot.
pub struct LocalStorageSlot {
    key: &'static str,
}

impl LocalStorageSlot {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl SessionStore for LocalStorageSlot {
    fn get(&self) -> Option<String> {
        storage_utils::local_storage()
            .ok()?
            .get_item(self.key)
            .ok()
            .flatten()
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        storage_utils::local_storage()?
            .set_item(self.key, token)
            .map_err(|_| StorageError::Write(self.key.to_string()))
    }

    fn remove(&self) -> Result<(), StorageError> {
        storage_utils::local_storage()?
            .remove_item(self.key)
            .map_err(|_| StorageError::Remove(self.key.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let slot = Self::new();
        *slot.value.borrow_mut() = Some(token.to_string());
        slot
    }
}

impl SessionStore for MemorySlot {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        *self.value.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

/// Authorized iff a non-empty token is persisted.
pub fn is_authorized(store: &dyn SessionStore) -> bool {
    store
        .get()
        .map(|token| !token.trim().is_empty())
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Admit,
    Redirect(AppRoute),
}

#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
    credentials: CredentialHolder,
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>, credentials: CredentialHolder) -> Self {
        Self { store, credentials }
    }

    pub fn browser(credentials: CredentialHolder) -> Self {
        Self::new(Rc::new(LocalStorageSlot::new(TOKEN_STORAGE_KEY)), credentials)
    }

    pub fn is_authorized(&self) -> bool {
        is_authorized(self.store.as_ref())
    }

    pub fn credentials(&self) -> &CredentialHolder {
        &self.credentials
    }

    fn persisted_token(&self) -> Option<String> {
        self.store.get().filter(|token| !token.trim().is_empty())
    }

    /// Installs a token left over from a previous visit. Returns whether one was found.
    pub fn arm(&self) -> bool {
        match self.persisted_token() {
            Some(token) => {
                self.credentials.install(&token);
                true
            }
            None => false,
        }
    }

    /// Entry check for protected views. On `Admit` the client already carries the token.
    pub fn admit(&self) -> GuardOutcome {
        match self.persisted_token() {
            Some(token) => {
                self.credentials.install(&token);
                GuardOutcome::Admit
            }
            None => GuardOutcome::Redirect(AppRoute::Login),
        }
    }

    /// Persists then installs a freshly issued token.
    pub fn establish(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(token)?;
        self.credentials.install(token);
        Ok(())
    }

    /// Drops the persisted token and the installed credential. Safe to repeat.
    pub fn evict(&self) {
        if let Err(err) = self.store.remove() {
            log::error!("Failed to clear persisted session: {}", err);
        }
        self.credentials.clear();
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(|| {
        let api = ApiClient::new();
        provide_context(api.clone());
        api
    });
    let session = Session::browser(api.credentials().clone());
    if session.arm() {
        log::info!("Restored admin session from storage");
    }
    provide_context(session);
    view! { <>{children()}</> }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Session::browser(api.credentials().clone())
    })
}
