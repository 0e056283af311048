use crate::shared::api_utils::cms_get_all;
use contracts::domain::a005_additional_services::AdditionalServiceSection;
use contracts::shared::site_config::SiteConfig;

const ADDITIONAL_SERVICES_API: &str = "/api/additional-services?populate=*";

pub async fn fetch_sections(config: &SiteConfig) -> Result<Vec<AdditionalServiceSection>, String> {
    cms_get_all(config, ADDITIONAL_SERVICES_API).await
}
