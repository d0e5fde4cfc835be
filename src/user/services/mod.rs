//! Application services for the user directory.

mod directory;

pub use directory::{UserDirectoryService, UserServiceError, UserServiceResult};
