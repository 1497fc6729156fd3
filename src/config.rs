use std::env;
use std::path::Path;

// Default configuration constants
pub const FALLBACK_API_BASE_URL: &str = "http://localhost:5000";
pub const USERS_ENDPOINT: &str = "/api/users";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_default())
}

/// Whether the curl-style request preview should be suppressed.
pub fn get_silent() -> bool {
    env::var("USERFETCH_SILENT")
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        FALLBACK_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
