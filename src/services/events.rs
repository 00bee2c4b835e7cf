use serde_json::Value;

use crate::services::api::{self, ApiError};
use crate::types::{DonationEvent, EventRequest};

pub struct EventsApi;

impl EventsApi {
    pub async fn list() -> Result<Vec<DonationEvent>, ApiError> {
        api::get_json("/events").await
    }

    pub async fn get(id: &str) -> Result<DonationEvent, ApiError> {
        api::get_json(&format!("/events/{}", id)).await
    }

    pub async fn create(event: &EventRequest) -> Result<DonationEvent, ApiError> {
        api::post_json("/events", event).await
    }

    pub async fn update(id: &str, event: &EventRequest) -> Result<DonationEvent, ApiError> {
        api::put_json(&format!("/events/{}", id), event).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        api::delete(&format!("/events/{}", id)).await
    }

    pub async fn register(id: &str) -> Result<Value, ApiError> {
        api::post_json(&format!("/events/{}/register", id), &Value::Null).await
    }
}
