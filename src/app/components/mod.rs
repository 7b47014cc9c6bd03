//! Shared UI components for the console pages.

pub mod layout;
pub mod nav;

pub use layout::Layout;
pub use nav::Nav;
