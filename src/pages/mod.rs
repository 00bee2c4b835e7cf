pub mod admin;
pub mod donations;
pub mod event_detail;
pub mod events;
pub mod home;
pub mod hospitals;
pub mod login;
pub mod market;
pub mod market_detail;
pub mod market_new;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod testimonials;
pub mod tip_detail;
pub mod tips;

pub use donations::MyDonations;
pub use event_detail::EventDetail;
pub use events::Events;
pub use home::Home;
pub use hospitals::Hospitals;
pub use login::Login;
pub use market::Market;
pub use market_detail::MarketDetail;
pub use market_new::MarketNew;
pub use not_found::NotFound;
pub use profile::Profile;
pub use register::Register;
pub use testimonials::Testimonials;
pub use tip_detail::TipDetail;
pub use tips::Tips;
