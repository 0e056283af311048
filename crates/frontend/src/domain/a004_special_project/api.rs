use crate::shared::api_utils::{cms_get, cms_get_all};
use contracts::domain::a004_special_project::SpecialProject;
use contracts::shared::cms::CmsResponse;
use contracts::shared::site_config::SiteConfig;

const SPECIAL_PROJECTS_API: &str = "/api/speczialnye-proekties";

pub async fn fetch_special_projects(config: &SiteConfig) -> Result<Vec<SpecialProject>, String> {
    cms_get_all(config, &format!("{}?populate=*", SPECIAL_PROJECTS_API)).await
}

pub async fn fetch_special_project(
    config: &SiteConfig,
    document_id: &str,
) -> Result<SpecialProject, String> {
    let path = format!("{}/{}?populate=*", SPECIAL_PROJECTS_API, document_id);
    let response: CmsResponse<SpecialProject> = cms_get(config, &path).await?;
    Ok(response.data)
}
