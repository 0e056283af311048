use axum::extract::State;
use axum::Json;
use contracts::shared::site_config::SiteConfig;

use crate::shared::state::AppState;

/// GET /api/site-config
pub async fn get_site_config(State(state): State<AppState>) -> Json<SiteConfig> {
    Json(state.site.as_ref().clone())
}
