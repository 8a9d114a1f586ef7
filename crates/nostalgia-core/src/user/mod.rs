//! User domain module.
//!
//! The only user data kept is the display name entered at the first prompt.

mod repository;

pub use repository::{NAME_KEY, ProfileRepository};
