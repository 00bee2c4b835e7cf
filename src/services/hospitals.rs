use web_sys::{File, FormData};

use crate::services::api::{self, ApiError};
use crate::types::{Hospital, HospitalRequest, UploadResponse};

pub struct HospitalsApi;

impl HospitalsApi {
    pub async fn list() -> Result<Vec<Hospital>, ApiError> {
        api::get_json("/hospitals").await
    }

    pub async fn create(hospital: &HospitalRequest) -> Result<Hospital, ApiError> {
        api::post_json("/hospitals", hospital).await
    }

    pub async fn update(id: &str, hospital: &HospitalRequest) -> Result<Hospital, ApiError> {
        api::put_json(&format!("/hospitals/{}", id), hospital).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        api::delete(&format!("/hospitals/{}", id)).await
    }

    pub async fn upload_image(file: &File) -> Result<UploadResponse, ApiError> {
        let form = FormData::new()
            .map_err(|_| ApiError::NetworkError("could not build form data".to_string()))?;
        form.append_with_blob("image", file)
            .map_err(|_| ApiError::NetworkError("could not attach file".to_string()))?;
        api::post_form("/hospitals/upload-image", form).await
    }
}
