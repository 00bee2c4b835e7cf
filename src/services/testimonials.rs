use crate::services::api::{self, ApiError};
use crate::types::{CreateTestimonialRequest, Testimonial};

pub struct TestimonialsApi;

impl TestimonialsApi {
    /// Approved testimonials only; moderation queue lives under the
    /// admin variants.
    pub async fn list() -> Result<Vec<Testimonial>, ApiError> {
        api::get_json("/testimonials").await
    }

    pub async fn create(content: String) -> Result<Testimonial, ApiError> {
        api::post_json("/testimonials", &CreateTestimonialRequest { content }).await
    }

    pub async fn admin_list() -> Result<Vec<Testimonial>, ApiError> {
        api::get_json("/testimonials/admin").await
    }

    pub async fn approve(id: &str) -> Result<Testimonial, ApiError> {
        api::put_empty(&format!("/testimonials/admin/{}/approve", id)).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        api::delete(&format!("/testimonials/admin/{}", id)).await
    }
}
