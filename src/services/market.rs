use crate::services::api::{self, ApiError};
use crate::types::{CreateMarketPostRequest, MarketPost};

pub struct MarketApi;

impl MarketApi {
    pub async fn list() -> Result<Vec<MarketPost>, ApiError> {
        api::get_json("/blood-market").await
    }

    pub async fn get(id: &str) -> Result<MarketPost, ApiError> {
        api::get_json(&format!("/blood-market/{}", id)).await
    }

    pub async fn create(post: &CreateMarketPostRequest) -> Result<MarketPost, ApiError> {
        api::post_json("/blood-market", post).await
    }

    pub async fn close(id: &str) -> Result<MarketPost, ApiError> {
        api::put_empty(&format!("/blood-market/{}/close", id)).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        api::delete(&format!("/blood-market/{}", id)).await
    }
}
