//! Client wrappers for the auth API plus the local token lifecycle. The
//! network operations are stateless request/response calls; only `login`
//! touches persisted state, and only when the server actually returns a
//! token.

use crate::app_lib::{AppError, api};
use crate::features::auth::storage;
use crate::features::auth::types::{AuthResponse, LoginRequest, RegisterRequest, VerifyOtpRequest};

/// Registers a new account. Persists nothing locally.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, AppError> {
    api::post_json("/auth/register", request).await
}

/// Submits the emailed one-time passcode. Persists nothing locally.
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<AuthResponse, AppError> {
    api::post_json("/auth/verify", request).await
}

/// Exchanges credentials for a session token. When the response carries a
/// token it is persisted before this returns.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, AppError> {
    let response: AuthResponse = api::post_json("/auth/login", request).await?;
    store_token_from(&response);
    Ok(response)
}

/// Persists the token carried by a login response. A 2xx response without
/// a token leaves storage untouched, so the caller stays signed out.
// TODO: decide whether a successful login without a token should be
// rejected instead of silently leaving the user signed out.
fn store_token_from(response: &AuthResponse) {
    if let Some(token) = &response.token {
        storage::set_token(token);
        log::debug!("session token persisted");
    }
}

/// Drops the persisted token. Never fails; clearing an absent token is
/// fine.
pub fn logout() {
    storage::clear_token();
    log::debug!("session token cleared");
}

/// Pure read of the persisted token.
pub fn get_token() -> Option<String> {
    storage::token()
}

/// True iff a session token is currently persisted.
pub fn is_authenticated() -> bool {
    storage::token().is_some()
}

#[cfg(test)]
mod tests {
    use super::{get_token, is_authenticated, logout, store_token_from};
    use crate::features::auth::types::AuthResponse;

    fn response(token: Option<&str>) -> AuthResponse {
        AuthResponse {
            success: true,
            message: "ok".to_string(),
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn login_response_with_token_authenticates() {
        logout();
        store_token_from(&response(Some("abc123")));

        assert!(is_authenticated());
        assert_eq!(get_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn successful_login_without_token_stays_signed_out() {
        logout();
        store_token_from(&response(None));

        assert!(!is_authenticated());
        assert!(get_token().is_none());
    }

    #[test]
    fn logout_clears_the_persisted_token() {
        store_token_from(&response(Some("abc123")));
        logout();

        assert!(!is_authenticated());
        assert!(get_token().is_none());
    }

    #[test]
    fn logout_on_an_empty_session_is_a_no_op() {
        logout();
        logout();

        assert!(!is_authenticated());
    }
}
