use crate::shared::api_utils::{cms_get, cms_get_all};
use contracts::domain::a003_filial::{Filial, FILIAL_POPULATE};
use contracts::shared::cms::{CmsResponse, Entity};
use contracts::shared::site_config::SiteConfig;

const FILIALS_API: &str = "/api/filialies";

/// Список филиалов (без вложенных связей)
pub async fn fetch_filials(config: &SiteConfig) -> Result<Vec<Entity<Filial>>, String> {
    cms_get_all(config, FILIALS_API).await
}

/// Филиал с отделениями, контактами и графиками работы
pub async fn fetch_filial(config: &SiteConfig, id: &str) -> Result<Entity<Filial>, String> {
    let path = format!("{}/{}?{}", FILIALS_API, id, FILIAL_POPULATE);
    let response: CmsResponse<Entity<Filial>> = cms_get(config, &path).await?;
    Ok(response.data)
}
