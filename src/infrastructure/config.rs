//! API endpoint configuration.
//!
//! One knob: the price API base URL, baked in at compile time from
//! `STOCK_API_URL` with a local development fallback.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL for the price API.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("STOCK_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Strip trailing slashes so path joins stay predictable.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base_url("http://api.example.com//"), "http://api.example.com");
        assert_eq!(normalize_base_url("http://api.example.com"), "http://api.example.com");
    }
}
