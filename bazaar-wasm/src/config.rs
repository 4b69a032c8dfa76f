/// Runtime configuration for the frontend. Passed into [`crate::attach`]
/// and carried down through component properties; there is no global
/// backend URL.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the marketplace backend.
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
