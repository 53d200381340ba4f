use std::env;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::{debug, info, warn};

/// Cross-origin settings for the HTTP API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows every origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Reads CORS_ORIGINS, a comma separated allow-list (defaults to `*`)
    pub fn from_env() -> Self {
        let raw = env::var("CORS_ORIGINS").unwrap_or_else(|_| {
            debug!("CORS_ORIGINS not set, allowing all origins");
            "*".to_string()
        });
        let config = Self::parse(&raw);
        info!(origins = ?config.allowed_origins, "CORS configuration loaded");
        config
    }

    pub fn parse(raw: &str) -> Self {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if allowed_origins.is_empty() {
            return Self::default();
        }
        CorsConfig { allowed_origins }
    }

    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn layer(&self) -> CorsLayer {
        if self.allows_any() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        // Wildcards are not allowed together with credentials, so mirror the request instead.
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            allowed_origins: vec!["*".to_string()],
        }
    }
}
