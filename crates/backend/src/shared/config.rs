use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Адреса удалённого каталога (mock API)
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_products_base_url")]
    pub products_base_url: String,
    #[serde(default = "default_fabrics_base_url")]
    pub fabrics_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products_base_url: default_products_base_url(),
            fabrics_base_url: default_fabrics_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_products_base_url() -> String {
    "https://eb5cd2a292a9c526.mokky.dev".to_string()
}

fn default_fabrics_base_url() -> String {
    "https://66d77b122c6b09c7.mokky.dev".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[catalog]
products_base_url = "https://eb5cd2a292a9c526.mokky.dev"
fabrics_base_url = "https://66d77b122c6b09c7.mokky.dev"
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(
            config.catalog.fabrics_base_url,
            "https://66d77b122c6b09c7.mokky.dev"
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[catalog]
products_base_url = "http://localhost:8080"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.products_base_url, "http://localhost:8080");
        assert_eq!(
            config.catalog.fabrics_base_url,
            "https://66d77b122c6b09c7.mokky.dev"
        );
    }
}
