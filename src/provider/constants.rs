pub mod gemini {
    pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
    pub const API_BASE: &str = "https://generativelanguage.googleapis.com";
    pub const API_VERSION: &str = "v1beta";
    pub const API_KEY_ENV_VAR: &str = "GOOGLE_GEMINI_KEY";
    pub const API_KEY_HEADER: &str = "x-goog-api-key";
}
