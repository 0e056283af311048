use serde::{Deserialize, Serialize};

/// Адрес контентного API в продуктиве
pub const DEFAULT_CMS_BASE_URL: &str = "https://mosoblenergo.ru/back";

/// Ящик, на который уходят обращения из формы обратной связи
pub const SUPPORT_EMAIL: &str = "mail@mosoblenergo.ru";

/// Настройки сайта, которые хост отдаёт фронтенду через `/api/site-config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub cms_base_url: String,
    pub support_email: String,
    #[serde(default)]
    pub map: MapSettings,
}

/// Начальное положение карты филиалов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// [широта, долгота]
    pub center: [f64; 2],
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: [55.76, 37.64],
            zoom: 8,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cms_base_url: DEFAULT_CMS_BASE_URL.to_string(),
            support_email: SUPPORT_EMAIL.to_string(),
            map: MapSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Полный адрес ресурса CMS по пути вида `/api/...`
    pub fn cms_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.cms_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Ссылка на загруженный файл: абсолютные адреса не трогаем
    pub fn media_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.cms_url(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cms_url_joins_without_double_slash() {
        let cfg = SiteConfig {
            cms_base_url: "https://example.org/back/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            cfg.cms_url("/api/filialies/3"),
            "https://example.org/back/api/filialies/3"
        );
        assert_eq!(cfg.cms_url("api/x"), "https://example.org/back/api/x");
    }

    #[test]
    fn test_media_url() {
        let cfg = SiteConfig::default();
        assert_eq!(
            cfg.media_url("/uploads/a.jpg"),
            "https://mosoblenergo.ru/back/uploads/a.jpg"
        );
        assert_eq!(cfg.media_url("https://cdn.example/a.jpg"), "https://cdn.example/a.jpg");
    }

    #[test]
    fn test_deserialize_without_map() {
        let cfg: SiteConfig = serde_json::from_str(
            r#"{"cms_base_url":"http://localhost:1337","support_email":"a@b.c"}"#,
        )
        .unwrap();
        assert_eq!(cfg.map, MapSettings::default());
    }
}
