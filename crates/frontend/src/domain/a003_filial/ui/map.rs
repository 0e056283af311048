//! Карта отделений.
//!
//! Сам виджет карты живёт в хост-странице: если на `window` есть функция
//! `renderFilialMap(elementId, config)`, ей передаётся центр, масштаб и метки.
//! Без неё остаётся только список адресов под картой.

use contracts::domain::a003_filial::{MapPlacemark, PLACEMARK_ICON_PATH};
use contracts::shared::site_config::{MapSettings, SiteConfig};
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

const MAP_ELEMENT_ID: &str = "filial-map";
const RENDER_FN: &str = "renderFilialMap";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MapWidgetConfig {
    center: [f64; 2],
    zoom: u8,
    icon_href: String,
    placemarks: Vec<MapPlacemark>,
}

fn render_map(config: &MapWidgetConfig) -> Result<bool, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let render = js_sys::Reflect::get(&window, &JsValue::from_str(RENDER_FN))
        .map_err(|e| format!("{e:?}"))?;
    let Some(render) = render.dyn_ref::<js_sys::Function>() else {
        return Ok(false);
    };
    let payload = serde_wasm_bindgen::to_value(config).map_err(|e| e.to_string())?;
    render
        .call2(&JsValue::NULL, &JsValue::from_str(MAP_ELEMENT_ID), &payload)
        .map_err(|e| format!("{e:?}"))?;
    Ok(true)
}

#[component]
pub fn FilialMap(
    #[prop(into)] placemarks: Signal<Vec<MapPlacemark>>,
    #[prop(into)] site: Signal<SiteConfig>,
) -> impl IntoView {
    Effect::new(move |_| {
        let site = site.get();
        let MapSettings { center, zoom } = site.map.clone();
        let config = MapWidgetConfig {
            center,
            zoom,
            icon_href: site.media_url(PLACEMARK_ICON_PATH),
            placemarks: placemarks.get(),
        };
        match render_map(&config) {
            Ok(true) => log::debug!("Map rendered with {} placemarks", config.placemarks.len()),
            Ok(false) => log::debug!("{} is not defined, map skipped", RENDER_FN),
            Err(e) => log::error!("Map render failed: {}", e),
        }
    });

    view! {
        <div id=MAP_ELEMENT_ID class="yandex-map"></div>
        <ul class="yandex-map__addresses">
            <For
                each=move || placemarks.get().into_iter().enumerate()
                key=|(i, p)| (*i, p.list_key())
                children=|(_, p)| view! { <li>{p.hint_content}</li> }
            />
        </ul>
    }
}
