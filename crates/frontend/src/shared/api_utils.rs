//! Загрузка JSON: настройки сайта от хоста и данные контентного API.
//!
//! Все функции возвращают `Result<T, String>`; страницы сами решают, что
//! показать при ошибке (обычно пустой список и запись в консоль).

use contracts::shared::cms::{next_page, CmsResponse, PageRequest, DEFAULT_PAGE_SIZE};
use contracts::shared::site_config::SiteConfig;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Адрес настроек на хосте, с которого загружен сайт
pub const SITE_CONFIG_PATH: &str = "/api/site-config";

/// GET и разбор JSON-ответа
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {} ({})", response.status(), url));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_site_config() -> Result<SiteConfig, String> {
    fetch_json(SITE_CONFIG_PATH).await
}

/// Запрос к CMS: `path` это путь с параметрами, например `/api/filialies/3?populate=*`
pub async fn cms_get<T: DeserializeOwned>(config: &SiteConfig, path: &str) -> Result<T, String> {
    fetch_json(&config.cms_url(path)).await
}

/// Выгружает коллекцию целиком.
///
/// Страницы запрашиваются по одной, следующая уходит только после разбора
/// предыдущей. Ответ без блока `pagination` считается единственной страницей.
pub async fn cms_get_all<T: DeserializeOwned>(
    config: &SiteConfig,
    path: &str,
) -> Result<Vec<T>, String> {
    let separator = if path.contains('?') { '&' } else { '?' };
    let mut items = Vec::new();
    let mut request = Some(PageRequest::first(DEFAULT_PAGE_SIZE));

    while let Some(page) = request {
        let url = format!("{}{}{}", path, separator, page.query());
        let response: CmsResponse<Vec<T>> = cms_get(config, &url).await?;
        items.extend(response.data);
        request = response.meta.pagination.as_ref().and_then(next_page);
        log::debug!("{}: page {} loaded, {} items so far", path, page.page, items.len());
    }

    Ok(items)
}
