//! In-memory adapters for the user directory ports.

mod users;

pub use users::InMemoryUserRepository;
