use contracts::shared::site_config::SiteConfig;
use std::sync::Arc;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: Arc::new(site),
        }
    }
}
