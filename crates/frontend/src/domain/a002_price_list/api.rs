use crate::shared::api_utils::cms_get_all;
use contracts::domain::a002_price_list::PriceLineItem;
use contracts::shared::site_config::SiteConfig;

const PRICE_LIST_API: &str = "/api/price-lists";

/// Весь прейскурант: все страницы коллекции по очереди
pub async fn fetch_price_list(config: &SiteConfig) -> Result<Vec<PriceLineItem>, String> {
    cms_get_all(config, PRICE_LIST_API).await
}
