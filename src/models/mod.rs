pub mod user_summary;

pub use user_summary::UserSummary;
