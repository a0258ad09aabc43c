//! The signed-in account as seen by the UI.

use dioxus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Account name without the `@` sigil.
    pub current_account: Option<String>,
}

impl Session {
    pub fn signed_in(account: impl Into<String>) -> Self {
        Self {
            current_account: Some(account.into()),
        }
    }

    pub fn account(&self) -> Option<&str> {
        self.current_account.as_deref()
    }

    /// Account remembered by the browser from a previous visit, if any.
    pub fn restore() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let account = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
                .map(|name| name.trim().trim_start_matches('@').to_string())
                .filter(|name| !name.is_empty());
            Self {
                current_account: account,
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "feedline.account";

/// Session provided by the platform shell; anonymous when none was provided.
pub fn use_session() -> Session {
    try_use_context::<Signal<Session>>()
        .map(|s| s())
        .unwrap_or_default()
}
