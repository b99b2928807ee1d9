pub const DEFAULT_BASE_URL: &str = "https://next-ecommerce-api.vercel.app";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "shopquick/0.1 (catalog)";

/// Settings for talking to the remote catalog API and paging through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Endpoint root, e.g. `https://next-ecommerce-api.vercel.app`.
    pub base_url: String,
    /// Number of products requested per page. Always at least 1.
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Config pointed at `base_url` with every other setting at its default.
    /// Mostly useful for tests against a mock server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Offset of the first product on `page` (1-based).
    #[must_use]
    pub fn offset_for_page(&self, page: u32) -> u64 {
        u64::from(page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.page_size, 20);
    }

    #[test]
    fn offset_for_first_page_is_zero() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.offset_for_page(1), 0);
    }

    #[test]
    fn offset_scales_with_page_size() {
        let cfg = CatalogConfig {
            page_size: 12,
            ..CatalogConfig::default()
        };
        assert_eq!(cfg.offset_for_page(3), 24);
    }

    #[test]
    fn offset_for_page_zero_saturates() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.offset_for_page(0), 0);
    }
}
