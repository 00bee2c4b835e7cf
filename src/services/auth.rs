use crate::services::api::{self, ApiError};
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};

pub struct AuthApi;

impl AuthApi {
    pub async fn login(id_token: String) -> Result<AuthResponse, ApiError> {
        api::post_json("/auth/login", &LoginRequest { id_token }).await
    }

    pub async fn register(id_token: String, name: String) -> Result<AuthResponse, ApiError> {
        api::post_json("/auth/register", &RegisterRequest { id_token, name }).await
    }
}
