// ============================================================================
// AUTH SERVICE - Google authorization code exchange
// ============================================================================

use url::form_urlencoded;

use crate::errors::AuthError;
use crate::models::TokenResponse;
use crate::routing::{Navigation, Route};
use crate::state::AuthSession;

use super::ApiClient;

const DEFAULT_REJECTION: &str = "Authentication failed";
const DEFAULT_PROVIDER_ERROR: &str = "Google login failed";

/// Outcome reported by the provider: a code, or an error with an optional description
pub fn code_from_provider(
    code: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
) -> Result<String, AuthError> {
    if let Some(error) = error.filter(|e| !e.is_empty()) {
        log::warn!("⚠️ Provider returned error '{}'", error);
        let message = error_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER_ERROR.to_string());
        return Err(AuthError::Provider(message));
    }

    code.filter(|c| !c.trim().is_empty())
        .ok_or(AuthError::MissingCode)
}

/// Reads `code` (or the provider's `error`) from a callback query string
pub fn code_from_query(query: &str) -> Result<String, AuthError> {
    let query = query.trim_start_matches('?');
    let mut code = None;
    let mut error = None;
    let mut description = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            "error_description" => description = Some(value.into_owned()),
            _ => {}
        }
    }

    code_from_provider(code, error, description)
}

/// Maps the backend answer to a token. Non-2xx bodies are the error message.
pub fn interpret_token_response(status: u16, body: &str) -> Result<String, AuthError> {
    if !(200..300).contains(&status) {
        let message = body.trim();
        let message = if message.is_empty() { DEFAULT_REJECTION } else { message };
        return Err(AuthError::Rejected(message.to_string()));
    }

    let parsed: TokenResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("❌ Failed to parse token response: {}", e);
        AuthError::InvalidResponse
    })?;
    Ok(parsed.access_token)
}

/// Stores the token on success; on failure the session is left untouched
pub fn complete_sign_in(session: &AuthSession, outcome: Result<String, AuthError>) -> Result<(), AuthError> {
    let token = outcome?;
    session.store_token(&token)?;
    log::info!("✅ Signed in");
    Ok(())
}

pub async fn exchange_code(client: &ApiClient, code: &str) -> Result<String, AuthError> {
    let response = client.exchange_google_code(code).await?;
    interpret_token_response(response.status, &response.body)
}

/// Exchange + store, shared by the nav bar popup and the callback route
pub async fn sign_in_with_code(client: &ApiClient, session: &AuthSession, code: &str) -> Result<(), AuthError> {
    let outcome = exchange_code(client, code).await;
    if let Err(e) = &outcome {
        log::error!("❌ Login error: {}", e);
    }
    complete_sign_in(session, outcome)
}

/// Where the callback screen goes next. Failures replace the history entry
/// so the dead callback URL cannot be reached with Back.
pub fn callback_navigation(result: &Result<(), AuthError>) -> Navigation {
    match result {
        Ok(()) => Navigation::push(Route::Home),
        Err(e) => Navigation::replace(Route::LoginError { message: e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_read_from_query() {
        assert_eq!(code_from_query("?code=4%2F0Ab&scope=email").unwrap(), "4/0Ab");
        assert_eq!(code_from_query("state=x&code=abc").unwrap(), "abc");
    }

    #[test]
    fn test_missing_code_is_an_error() {
        assert_eq!(code_from_query(""), Err(AuthError::MissingCode));
        assert_eq!(code_from_query("?code="), Err(AuthError::MissingCode));
        assert_eq!(code_from_query("?scope=email"), Err(AuthError::MissingCode));
    }

    #[test]
    fn test_provider_error_wins_over_code() {
        let err = code_from_query("?error=access_denied&error_description=User+cancelled").unwrap_err();
        assert_eq!(err.to_string(), "User cancelled");
        let err = code_from_provider(None, Some("popup_closed".to_string()), None).unwrap_err();
        assert_eq!(err.to_string(), "Google login failed");
    }

    #[test]
    fn test_server_error_body_becomes_message() {
        let err = interpret_token_response(500, "server error").unwrap_err();
        assert_eq!(err.to_string(), "server error");
        let err = interpret_token_response(401, "").unwrap_err();
        assert_eq!(err.to_string(), "Authentication failed");
    }

    #[test]
    fn test_malformed_success_body() {
        assert_eq!(interpret_token_response(200, "<html>"), Err(AuthError::InvalidResponse));
        assert_eq!(interpret_token_response(200, "{}"), Err(AuthError::InvalidResponse));
        assert_eq!(interpret_token_response(200, r#"{"access_token":"jwt"}"#).unwrap(), "jwt");
    }

    #[test]
    fn test_failed_exchange_stores_no_token() {
        let session = AuthSession::in_memory();
        let result = complete_sign_in(&session, interpret_token_response(500, "server error"));
        assert_eq!(result.unwrap_err().to_string(), "server error");
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_successful_exchange_stores_token() {
        let session = AuthSession::in_memory();
        let outcome = interpret_token_response(200, r#"{"access_token":"jwt-1","token_type":"bearer"}"#);
        complete_sign_in(&session, outcome).unwrap();
        assert_eq!(session.token().as_deref(), Some("jwt-1"));
    }

    #[test]
    fn test_callback_without_code_replaces_history_with_error_route() {
        let result = code_from_query("").map(|_| ());
        let nav = callback_navigation(&result);
        assert!(nav.replace);
        assert_eq!(
            nav.route,
            Route::LoginError { message: "Missing authorization code".to_string() }
        );
        assert_eq!(nav.route.to_url(), "/login-error?message=Missing%20authorization%20code");
    }

    #[test]
    fn test_callback_success_goes_home() {
        let nav = callback_navigation(&Ok(()));
        assert_eq!(nav.route, Route::Home);
        assert!(!nav.replace);
    }
}
