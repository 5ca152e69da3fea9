use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
    pub recommendations: RecommendationsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 5003".
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub page_size: usize,
    pub search_debounce_ms: u32,
    /// Maximum of the price slider; a slider left here sends no `max_price`.
    pub price_ceiling: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RecommendationsConfig {
    pub count: usize,
    pub personal_limit: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub toast_timeout_ms: u32,
    pub message_timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5003/api"

[catalog]
page_size = 12
search_debounce_ms = 300
price_ceiling = 200.0

[recommendations]
count = 5
personal_limit = 4

[ui]
toast_timeout_ms = 5000
message_timeout_ms = 5000
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5003/api".to_string(),
            },
            catalog: CatalogConfig {
                page_size: 12,
                search_debounce_ms: 300,
                price_ceiling: 200.0,
            },
            recommendations: RecommendationsConfig {
                count: 5,
                personal_limit: 4,
            },
            ui: UiConfig {
                toast_timeout_ms: 5000,
                message_timeout_ms: 5000,
            },
        }
    }
}

/// Parse a TOML document, applying a build-time `GLOWUP_API_BASE` override.
pub fn parse_config(contents: &str, api_base_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(contents)?;
    if let Some(base) = api_base_override {
        config.api.base_url = base.trim_end_matches('/').to_string();
    }
    if config.catalog.page_size == 0 {
        config.catalog.page_size = 12;
    }
    Ok(config)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    match parse_config(DEFAULT_CONFIG, option_env!("GLOWUP_API_BASE")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration is invalid, using defaults: {}", e);
            AppConfig::default()
        }
    }
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog.page_size, 12);
    }

    #[test]
    fn test_api_base_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://glowup.example/api/")).unwrap();
        assert_eq!(config.api.base_url, "https://glowup.example/api");
    }

    #[test]
    fn test_zero_page_size_is_replaced() {
        let doc = DEFAULT_CONFIG.replace("page_size = 12", "page_size = 0");
        let config = parse_config(&doc, None).unwrap();
        assert_eq!(config.catalog.page_size, 12);
    }

    #[test]
    fn test_broken_config_is_an_error() {
        assert!(parse_config("[api]\nbase_url = 5", None).is_err());
    }
}
