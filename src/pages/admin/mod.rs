pub mod donations;
pub mod events;
pub mod hospitals;
pub mod newsletter;
pub mod testimonials;
pub mod tips;
pub mod users;

pub use donations::AdminDonations;
pub use events::AdminEvents;
pub use hospitals::AdminHospitals;
pub use newsletter::AdminNewsletter;
pub use testimonials::AdminTestimonials;
pub use tips::AdminTips;
pub use users::AdminUsers;
