use crate::shared::api_utils::fetch_site_config;
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;

/// Общее состояние сайта: настройки от хоста и окно обратной связи
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: RwSignal<SiteConfig>,
    /// `true`, когда настройки получены (или окончательно заменены значениями по умолчанию)
    pub config_ready: RwSignal<bool>,
    pub feedback_open: RwSignal<bool>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(SiteConfig::default()),
            config_ready: RwSignal::new(false),
            feedback_open: RwSignal::new(false),
        }
    }

    /// Однократная загрузка `/api/site-config`
    pub fn load(&self) {
        let config = self.config;
        let ready = self.config_ready;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_site_config().await {
                Ok(loaded) => config.set(loaded),
                Err(e) => log::warn!("Site config unavailable, using defaults: {}", e),
            }
            ready.set(true);
        });
    }

    /// Запускает `f`, как только настройки загружены. Сигналы, прочитанные
    /// внутри `f`, перезапускают его (например, параметр маршрута).
    pub fn with_config(&self, f: impl Fn(SiteConfig) + 'static) {
        let this = *self;
        Effect::new(move |_| {
            if this.config_ready.get() {
                f(this.config.get_untracked());
            }
        });
    }

    pub fn open_feedback(&self) {
        self.feedback_open.set(true);
    }

    pub fn close_feedback(&self) {
        self.feedback_open.set(false);
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().unwrap_or_else(|| {
        log::error!("SiteContext not provided, falling back to defaults");
        SiteContext::new()
    })
}
