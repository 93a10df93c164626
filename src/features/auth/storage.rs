//! Session token persistence. Browser builds read and write
//! `localStorage`; native builds keep the token in a process-local cell so
//! the state logic above it stays testable off-target. Writes and removals
//! swallow storage failures — a browser with storage disabled degrades to a
//! signed-out session.

/// localStorage key holding the opaque session token.
pub const TOKEN_KEY: &str = "authToken";

#[cfg(target_arch = "wasm32")]
pub fn token() -> Option<String> {
    let storage = local_storage()?;
    storage.get_item(TOKEN_KEY).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn set_token(value: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable; session will not survive a reload");
        return;
    };
    if storage.set_item(TOKEN_KEY, value).is_err() {
        log::warn!("unable to persist session token");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
mod cell {
    use std::cell::RefCell;

    thread_local! {
        pub(super) static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn token() -> Option<String> {
    cell::TOKEN.with(|slot| slot.borrow().clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_token(value: &str) {
    cell::TOKEN.with(|slot| *slot.borrow_mut() = Some(value.to_string()));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_token() {
    cell::TOKEN.with(|slot| *slot.borrow_mut() = None);
}

#[cfg(test)]
mod tests {
    use super::{TOKEN_KEY, clear_token, set_token, token};

    #[test]
    fn storage_key_matches_the_persisted_contract() {
        assert_eq!(TOKEN_KEY, "authToken");
    }

    #[test]
    fn set_then_get_round_trips() {
        set_token("abc123");
        assert_eq!(token().as_deref(), Some("abc123"));
    }

    #[test]
    fn clear_removes_the_token() {
        set_token("abc123");
        clear_token();
        assert!(token().is_none());
    }
}
