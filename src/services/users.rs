use crate::services::api::{self, ApiError};
use crate::types::{UpdateProfileRequest, UpdateRoleRequest, User};

pub struct UsersApi;

impl UsersApi {
    pub async fn profile() -> Result<User, ApiError> {
        api::get_json("/profile").await
    }

    pub async fn update_profile(profile: &UpdateProfileRequest) -> Result<User, ApiError> {
        api::post_json("/profile", profile).await
    }

    pub async fn list() -> Result<Vec<User>, ApiError> {
        api::get_json("/users").await
    }

    pub async fn set_role(id: &str, role: String) -> Result<User, ApiError> {
        api::put_json(&format!("/users/{}/role", id), &UpdateRoleRequest { role }).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        api::delete(&format!("/users/{}", id)).await
    }
}
