use crate::services::api::{self, ApiError};
use crate::types::{Donation, Eligibility, UpdateStatusRequest};

pub struct DonationsApi;

impl DonationsApi {
    pub async fn mine() -> Result<Vec<Donation>, ApiError> {
        api::get_json("/donations/me").await
    }

    pub async fn list() -> Result<Vec<Donation>, ApiError> {
        api::get_json("/donations").await
    }

    pub async fn update_status(id: &str, status: String) -> Result<Donation, ApiError> {
        api::put_json(
            &format!("/donations/{}/status", id),
            &UpdateStatusRequest { status },
        )
        .await
    }

    pub async fn eligibility() -> Result<Eligibility, ApiError> {
        api::get_json("/donations/eligibility").await
    }
}
