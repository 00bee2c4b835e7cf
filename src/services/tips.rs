use web_sys::{File, FormData};

use crate::services::api::{self, ApiError};
use crate::types::{Tip, TipRequest, UploadResponse};

pub struct TipsApi;

impl TipsApi {
    pub async fn list() -> Result<Vec<Tip>, ApiError> {
        api::get_json("/tips").await
    }

    pub async fn get(id: &str) -> Result<Tip, ApiError> {
        api::get_json(&format!("/tips/{}", id)).await
    }

    pub async fn create(tip: &TipRequest) -> Result<Tip, ApiError> {
        api::post_json("/tips", tip).await
    }

    pub async fn update(id: &str, tip: &TipRequest) -> Result<Tip, ApiError> {
        api::put_json(&format!("/tips/{}", id), tip).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        api::delete(&format!("/tips/{}", id)).await
    }

    pub async fn upload_image(file: &File) -> Result<UploadResponse, ApiError> {
        let form = FormData::new()
            .map_err(|_| ApiError::NetworkError("could not build form data".to_string()))?;
        form.append_with_blob("image", file)
            .map_err(|_| ApiError::NetworkError("could not attach file".to_string()))?;
        api::post_form("/tips/upload-image", form).await
    }
}
