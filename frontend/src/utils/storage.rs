//! Thin wrapper over `localStorage`.
//!
//! Host builds (SSR rendering and unit tests) have no browser, so values are
//! kept in a thread-local map with the same interface.

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    Unavailable,
    #[error("localStorage rejected `{0}`")]
    Access(String),
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;
    use web_sys::Storage;

    fn local_storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::NoWindow)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }

    pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Access(key.to_string()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Access(key.to_string()))
    }

    pub fn remove_item(key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Access(key.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::StorageError;
    use std::{cell::RefCell, collections::HashMap};

    thread_local! {
        static ITEMS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
        Ok(ITEMS.with(|items| items.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        ITEMS.with(|items| {
            items.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), StorageError> {
        ITEMS.with(|items| {
            items.borrow_mut().remove(key);
        });
        Ok(())
    }
}

pub use backend::{get_item, remove_item, set_item};

pub fn access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn refresh_token() -> Option<String> {
    get_item(REFRESH_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_tokens(access_token: &str, refresh_token: &str) -> Result<(), StorageError> {
    set_item(ACCESS_TOKEN_KEY, access_token)?;
    set_item(REFRESH_TOKEN_KEY, refresh_token)
}

pub fn clear_tokens() {
    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
        if let Err(err) = remove_item(key) {
            log::warn!("failed to clear {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_and_clear() {
        store_tokens("access", "refresh").unwrap();
        assert_eq!(access_token().as_deref(), Some("access"));
        assert_eq!(refresh_token().as_deref(), Some("refresh"));

        clear_tokens();
        assert!(access_token().is_none());
        assert!(refresh_token().is_none());
    }

    #[test]
    fn empty_token_counts_as_missing() {
        set_item(ACCESS_TOKEN_KEY, "").unwrap();
        assert!(access_token().is_none());
        clear_tokens();
    }
}
