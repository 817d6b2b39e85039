/// Storefront configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PRODUCTS_PATH | (embedded seed data) | Path to a catalog JSON file |
/// | LOG_LEVEL | info | Log level filter |
/// | LOG_DIR | (terminal output) | Directory for daily-rolling log files |
/// | AUTO_REVIEW | true | Switch to the order form after each add |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// PRODUCTS_PATH=./data/products.json AUTO_REVIEW=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional external catalog file; the embedded seed data is used
    /// when unset
    pub products_path: Option<String>,
    /// Log level filter
    pub log_level: String,
    /// Log file directory (terminal output when unset)
    pub log_dir: Option<String>,
    /// Stage-advance policy: jump to the order form right after adding a
    /// product (the original storefront's behavior). With `false`, the
    /// user navigates explicitly.
    pub auto_review: bool,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            products_path: std::env::var("PRODUCTS_PATH").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            auto_review: std::env::var("AUTO_REVIEW")
                .ok()
                .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
                .unwrap_or(true),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_path: None,
            log_level: "info".into(),
            log_dir: None,
            auto_review: true,
            environment: "development".into(),
        }
    }
}
