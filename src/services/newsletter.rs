use crate::services::api::{self, ApiError};
use crate::types::{SubscribeRequest, Subscriber};

pub struct NewsletterApi;

impl NewsletterApi {
    pub async fn subscribe(email: String) -> Result<Subscriber, ApiError> {
        api::post_json("/newsletter/subscribe", &SubscribeRequest { email }).await
    }

    pub async fn list() -> Result<Vec<Subscriber>, ApiError> {
        api::get_json("/newsletter").await
    }
}
