use contracts::shared::site_config::{MapSettings, SiteConfig, DEFAULT_CMS_BASE_URL, SUPPORT_EMAIL};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Переменная окружения, перекрывающая адрес CMS из config.toml
pub const CMS_BASE_URL_ENV: &str = "SITE_CMS_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

/// Секция `[site]`: всё необязательно, пропуски берутся из значений по умолчанию
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteSection {
    pub cms_base_url: Option<String>,
    pub support_email: Option<String>,
    pub map_center: Option<[f64; 2]>,
    pub map_zoom: Option<u8>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> Result<Config, ConfigError> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_from_file(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }

    /// Каталог со сборкой фронтенда.
    /// Относительный путь разрешается от каталога исполняемого файла.
    pub fn static_dir(&self) -> PathBuf {
        let dir = Path::new(&self.server.static_dir);
        if dir.is_absolute() {
            return dir.to_path_buf();
        }
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                return exe_dir.join(dir);
            }
        }
        dir.to_path_buf()
    }

    /// Настройки для фронтенда с учётом переменных окружения
    pub fn site_config(&self) -> SiteConfig {
        self.site_config_with(|key| std::env::var(key).ok())
    }

    fn site_config_with(&self, env: impl Fn(&str) -> Option<String>) -> SiteConfig {
        let site = &self.site;
        let cms_base_url = env(CMS_BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| site.cms_base_url.clone())
            .unwrap_or_else(|| DEFAULT_CMS_BASE_URL.to_string());

        let defaults = MapSettings::default();
        SiteConfig {
            cms_base_url,
            support_email: site
                .support_email
                .clone()
                .unwrap_or_else(|| SUPPORT_EMAIL.to_string()),
            map: MapSettings {
                center: site.map_center.unwrap_or(defaults.center),
                zoom: site.map_zoom.unwrap_or(defaults.zoom),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.site_config_with(|_| None), SiteConfig::default());
    }

    #[test]
    fn test_site_section_and_env_override() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            static_dir = "/srv/site"

            [site]
            cms_base_url = "http://cms.local"
            map_zoom = 10
            "#,
        )
        .unwrap();

        let site = config.site_config_with(|_| None);
        assert_eq!(site.cms_base_url, "http://cms.local");
        assert_eq!(site.support_email, SUPPORT_EMAIL);
        assert_eq!(site.map.zoom, 10);
        assert_eq!(site.map.center, MapSettings::default().center);

        let overridden = config.site_config_with(|key| {
            (key == CMS_BASE_URL_ENV).then(|| "https://staging.example/back".to_string())
        });
        assert_eq!(overridden.cms_base_url, "https://staging.example/back");

        assert_eq!(config.static_dir(), PathBuf::from("/srv/site"));
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_invalid_host() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".to_string();
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_unreadable_file() {
        let err = load_from_file(Path::new("/definitely/missing/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
