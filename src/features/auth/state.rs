//! Auth session state and context for the view tree. The provider derives
//! the flag from persisted storage once at construction; login and logout
//! update it explicitly. There is no background revalidation — the flag can
//! go stale if the server invalidates the token, and the next failing API
//! call is the signal.

use crate::app_lib::AppError;
use crate::features::auth::client;
use leptos::prelude::*;

/// Auth session context shared through Leptos.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub is_authenticated: RwSignal<bool>,
}

impl AuthContext {
    /// Builds the context with the flag derived from whether a session
    /// token is currently persisted.
    fn from_storage() -> Self {
        Self {
            is_authenticated: RwSignal::new(client::is_authenticated()),
        }
    }

    /// Explicitly records the current authentication status.
    pub fn set_authenticated(&self, value: bool) {
        self.is_authenticated.set(value);
    }

    /// Clears the persisted token and flips the flag in one step.
    pub fn logout(&self) {
        client::logout();
        self.is_authenticated.set(false);
    }
}

/// Provides the auth context to every descendant.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::from_storage();
    provide_context(auth);

    view! { {children()} }
}

/// Returns the auth context, or a configuration error when called outside
/// an [`AuthProvider`].
pub fn use_auth() -> Result<AuthContext, AppError> {
    auth_from(use_context::<AuthContext>())
}

fn auth_from(context: Option<AuthContext>) -> Result<AuthContext, AppError> {
    context.ok_or_else(|| {
        AppError::Config("use_auth must be used within an AuthProvider".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::{AuthContext, auth_from, use_auth};
    use crate::app_lib::AppError;
    use crate::features::auth::client;
    use leptos::prelude::GetUntracked;

    #[test]
    fn missing_provider_is_a_config_error() {
        match auth_from(None) {
            Err(AppError::Config(message)) => assert!(message.contains("AuthProvider")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn use_auth_outside_a_provider_errors() {
        assert!(matches!(use_auth(), Err(AppError::Config(_))));
    }

    #[test]
    fn flag_tracks_storage_through_login_and_logout() {
        client::logout();
        let auth = AuthContext::from_storage();
        assert!(!auth.is_authenticated.get_untracked());

        crate::features::auth::storage::set_token("abc123");
        auth.set_authenticated(client::is_authenticated());
        assert!(auth.is_authenticated.get_untracked());

        auth.logout();
        assert!(!auth.is_authenticated.get_untracked());
        assert!(client::get_token().is_none());
    }
}
