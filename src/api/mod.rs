pub mod client;
pub mod error;
pub mod users;

pub use client::{get_json, set_silent};
pub use error::FetchError;
pub use users::{fetch_user, fetch_user_data, UserFetcher};
