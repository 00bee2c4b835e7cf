mod guards;
mod layout;
mod newsletter_form;

pub use guards::{RequireAdmin, RequireAuth, RequireProfile};
pub use layout::Layout;
pub use newsletter_form::NewsletterForm;
