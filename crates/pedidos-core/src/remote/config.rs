//! Remote service configuration

/// Development backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Where the orders service lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Trailing slashes are dropped so paths can be appended directly
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{origin}/api`, for a UI served next to the service
    pub fn from_origin(origin: &str) -> Self {
        Self::new(format!("{}/api", origin.trim_end_matches('/')))
    }

    /// Build-time override first, then the page origin
    pub fn resolve(build_override: Option<&str>, origin: Option<&str>) -> Self {
        match (build_override, origin) {
            (Some(url), _) if !url.trim().is_empty() => Self::new(url.trim()),
            (_, Some(origin)) if !origin.is_empty() && origin != "null" => Self::from_origin(origin),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}{path}`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://example.com/api/");
        assert_eq!(config.base_url(), "https://example.com/api");
        assert_eq!(config.url("/pedidos"), "https://example.com/api/pedidos");
    }

    #[test]
    fn test_resolve_order() {
        assert_eq!(
            ApiConfig::resolve(Some("https://svc.test/api"), Some("https://ui.test")).base_url(),
            "https://svc.test/api"
        );
        assert_eq!(
            ApiConfig::resolve(None, Some("https://ui.test/")).base_url(),
            "https://ui.test/api"
        );
        assert_eq!(ApiConfig::resolve(Some("  "), Some("https://ui.test")).base_url(), "https://ui.test/api");
        assert_eq!(ApiConfig::resolve(None, Some("null")), ApiConfig::default());
        assert_eq!(ApiConfig::resolve(None, None).base_url(), DEFAULT_BASE_URL);
    }
}
