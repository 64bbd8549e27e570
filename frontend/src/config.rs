#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, requests stay relative to the page origin
}

pub const WAITLIST_PATH: &str = "/api/join-waitlist";

pub fn waitlist_endpoint() -> String {
    format!("{}{}", get_backend_url(), WAITLIST_PATH)
}

// Toasts
pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DURATION_MS: u32 = 5000;
