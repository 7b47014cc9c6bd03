//! Page components, one per route.

mod home;
mod manage_radio;
mod not_found;
mod support;

pub use home::Home;
pub use manage_radio::ManageRadio;
pub use not_found::NotFound;
pub use support::Support;
