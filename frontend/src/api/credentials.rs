use std::{cell::RefCell, fmt, rc::Rc};

/// Bearer credential shared by every clone of the API client.
///
/// Installing a token makes all subsequently built requests carry
/// `Authorization: Bearer <token>`; clearing it removes the header. Clones share
/// the same slot, so the session and the client always agree.
#[derive(Clone, Default)]
pub struct CredentialHolder {
    token: Rc<RefCell<Option<String>>>,
}

impl CredentialHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the credential and returns the effective value. Blank tokens clear it.
    pub fn set(&self, token: Option<&str>) -> Option<String> {
        let next = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        *self.token.borrow_mut() = next.clone();
        next
    }

    pub fn install(&self, token: &str) -> Option<String> {
        self.set(Some(token))
    }

    pub fn clear(&self) -> Option<String> {
        self.set(None)
    }

    pub fn current(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_set(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub(crate) fn authorization_value(&self) -> Option<String> {
        self.token
            .borrow()
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }
}

impl fmt::Debug for CredentialHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHolder")
            .field("token", &self.is_set().then_some("<redacted>"))
            .finish()
    }
}
