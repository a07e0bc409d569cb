//! Frontend configuration

/// Build-time application settings
pub struct AppConfig;

impl AppConfig {
    /// Supabase project URL; the page origin is used when unset
    pub const SUPABASE_URL: Option<&'static str> = option_env!("SPORTIVA_SUPABASE_URL");

    /// Supabase anon (publishable) key
    pub const SUPABASE_ANON_KEY: &'static str = match option_env!("SPORTIVA_SUPABASE_ANON_KEY") {
        Some(key) => key,
        None => "",
    };

    /// Session storage key for the persisted session
    pub const SESSION_STORAGE_KEY: &'static str = "sportiva.session";

    /// Session expiry check interval in milliseconds
    pub const SESSION_CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute

    /// Where unauthenticated visitors are sent
    pub const LOGIN_PATH: &'static str = "/auth";

    /// Landing page after signing in
    pub const HOME_PATH: &'static str = "/dashboard";

    /// Base URL for backend calls
    pub fn supabase_url() -> String {
        if let Some(url) = Self::SUPABASE_URL {
            return url.to_string();
        }

        // Try to get from window location
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }

        String::new()
    }
}
