use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub path: String,
}

/// The single admin account
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "admin123".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub seed_demo_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[storage]
path = "target/data/library.json"

[auth]
username = "admin"
password = "admin123"

[logging]
dir = "target/logs"

[catalog]
seed_demo_data = true
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
                return load_config_from(&config_path);
            }
            // logging is not initialised yet
            eprintln!("config.toml not found at: {}", config_path.display());
        }
    }

    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Resolves relative paths relative to the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}
