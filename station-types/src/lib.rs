//! Wire types for the station configuration REST API.
//!
//! These types define the JSON bodies exchanged between the admin console
//! and the API that stores radios, stations and admin accounts.
//!
//! # Modules
//! - [`admin`] - Admin accounts and sessions
//! - [`station`] - Internet radio stations grouped by network
//! - [`radio`] - Radios and their ordered station lists

pub mod admin;
pub mod radio;
pub mod station;

// Re-export commonly used types at crate root
pub use admin::{Admin, Credentials, SessionStatus};
pub use radio::{NewRadio, Radio, RadioStation, RadioUpdate};
pub use station::{NewStation, Station};
