// ============================================================================
// AUTH STATE - bearer token behind an explicit session object
// ============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::errors::AuthError;
use crate::utils::{load_raw, remove_from_storage, save_raw, STORAGE_KEY_AUTH_TOKEN};

/// Where the bearer token is kept
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

/// Browser localStorage under the `authToken` key
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn read(&self) -> Option<String> {
        load_raw(STORAGE_KEY_AUTH_TOKEN).filter(|token| !token.is_empty())
    }

    fn write(&self, token: &str) -> Result<(), String> {
        save_raw(STORAGE_KEY_AUTH_TOKEN, token)
    }

    fn clear(&self) -> Result<(), String> {
        remove_from_storage(STORAGE_KEY_AUTH_TOKEN)
    }
}

/// In-memory store, for tests and for browsers without localStorage
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Read/write/clear access to the login token, handed to components
/// through context instead of touching storage directly.
#[derive(Clone)]
pub struct AuthSession {
    store: Rc<dyn TokenStore>,
}

impl AuthSession {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session on localStorage, or in memory when storage is unavailable
    pub fn browser() -> Self {
        if crate::utils::get_local_storage().is_some() {
            Self::new(Rc::new(LocalTokenStore))
        } else {
            log::warn!("⚠️ localStorage unavailable, login will not survive a reload");
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryTokenStore::default()))
    }

    pub fn token(&self) -> Option<String> {
        self.store.read()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn store_token(&self, token: &str) -> Result<(), AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::InvalidResponse);
        }
        self.store.write(token).map_err(AuthError::Storage)
    }

    pub fn clear(&self) -> Result<(), AuthError> {
        self.store.clear().map_err(AuthError::Storage)
    }
}

impl PartialEq for AuthSession {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_read_clear() {
        let session = AuthSession::in_memory();
        assert!(!session.is_logged_in());

        session.store_token("jwt-123").unwrap();
        assert_eq!(session.token().as_deref(), Some("jwt-123"));
        assert!(session.is_logged_in());

        session.clear().unwrap();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let session = AuthSession::in_memory();
        assert_eq!(session.store_token("  "), Err(AuthError::InvalidResponse));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_clones_share_the_store() {
        let session = AuthSession::in_memory();
        let other = session.clone();
        other.store_token("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session, other);
        assert_ne!(session, AuthSession::in_memory());
    }
}
