//! Domain model for the user directory.

mod profile;

pub use profile::UserProfile;
