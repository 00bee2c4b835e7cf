pub mod api;
pub mod auth;
pub mod donations;
pub mod events;
pub mod hospitals;
pub mod identity;
pub mod market;
pub mod newsletter;
pub mod session;
pub mod testimonials;
pub mod tips;
pub mod users;

pub use api::ApiError;
pub use auth::AuthApi;
pub use donations::DonationsApi;
pub use events::EventsApi;
pub use hospitals::HospitalsApi;
pub use identity::IdentityService;
pub use market::MarketApi;
pub use newsletter::NewsletterApi;
pub use session::Session;
pub use testimonials::TestimonialsApi;
pub use tips::TipsApi;
pub use users::UsersApi;
