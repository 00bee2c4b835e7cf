use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

use crate::services::api::ApiError;

const IDENTITY_BASE: &str = "https://identitytoolkit.googleapis.com/v1";

const IDENTITY_API_KEY: &str = match option_env!("BLOODLINK_IDENTITY_KEY") {
    Some(key) => key,
    None => "demo-key",
};

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct CredentialsPayload {
    email: String,
    password: String,
    return_secure_token: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    id_token: String,
}

#[derive(Deserialize, Debug)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize, Debug)]
struct ProviderError {
    message: String,
}

/// Exchanges email/password credentials with the identity provider for
/// an identity token. The token is then traded for a backend session
/// via the auth service.
pub struct IdentityService;

impl IdentityService {
    pub async fn sign_in(email: &str, password: &str) -> Result<String, ApiError> {
        Self::request("accounts:signInWithPassword", email, password).await
    }

    pub async fn sign_up(email: &str, password: &str) -> Result<String, ApiError> {
        Self::request("accounts:signUp", email, password).await
    }

    async fn request(endpoint: &str, email: &str, password: &str) -> Result<String, ApiError> {
        let payload = CredentialsPayload {
            email: email.to_string(),
            password: password.to_string(),
            return_secure_token: true,
        };

        let response = Request::post(&format!(
            "{}/{}?key={}",
            IDENTITY_BASE, endpoint, IDENTITY_API_KEY
        ))
        .header("Content-Type", "application/json")
        .json(&payload)?
        .send()
        .await?;

        if response.ok() {
            let token: TokenResponse = response.json().await?;
            Ok(token.id_token)
        } else {
            let code = match response.json::<ProviderErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("HTTP {}", response.status()),
            };
            log::warn!("identity provider rejected request: {}", code);
            Err(ApiError::ValidationError(Self::friendly_message(&code)))
        }
    }

    /// Provider error codes are SCREAMING_SNAKE strings; map the ones
    /// users actually hit to readable copy.
    fn friendly_message(code: &str) -> String {
        match code {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                "Invalid email or password".to_string()
            }
            "EMAIL_EXISTS" => "An account with this email already exists".to_string(),
            code if code.starts_with("WEAK_PASSWORD") => {
                "Password should be at least 6 characters".to_string()
            }
            code if code.starts_with("TOO_MANY_ATTEMPTS") => {
                "Too many attempts. Please try again later.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityService;

    #[test]
    fn maps_credential_errors_to_one_message() {
        for code in ["EMAIL_NOT_FOUND", "INVALID_PASSWORD", "INVALID_LOGIN_CREDENTIALS"] {
            assert_eq!(
                IdentityService::friendly_message(code),
                "Invalid email or password"
            );
        }
    }

    #[test]
    fn maps_weak_password_variants() {
        let msg = IdentityService::friendly_message("WEAK_PASSWORD : Password should be at least 6 characters");
        assert_eq!(msg, "Password should be at least 6 characters");
    }

    #[test]
    fn passes_unknown_codes_through() {
        assert_eq!(IdentityService::friendly_message("USER_DISABLED"), "USER_DISABLED");
    }
}
