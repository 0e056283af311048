use crate::domain::a003_filial::api::fetch_filials;
use crate::layout::global_context::use_site_context;
use crate::layout::top_image::TopImage;
use contracts::domain::a003_filial::filial_details_path;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[derive(Clone, Debug)]
struct FilialRow {
    id: i64,
    name: String,
    address: String,
}

#[component]
pub fn FilialList() -> impl IntoView {
    let site = use_site_context();
    let (items, set_items) = signal::<Vec<FilialRow>>(Vec::new());
    let (loading, set_loading) = signal(true);

    site.with_config(move |config| {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_filials(&config).await {
                Ok(list) => {
                    let mut rows: Vec<FilialRow> = list
                        .into_iter()
                        .map(|e| FilialRow {
                            id: e.id,
                            name: e.attributes.name,
                            address: e.attributes.address.unwrap_or_default(),
                        })
                        .collect();
                    rows.sort_by(|a, b| a.name.cmp(&b.name));
                    set_items.set(rows);
                }
                Err(e) => {
                    log::error!("Ошибка при загрузке филиалов: {}", e);
                    set_items.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <TopImage title="Филиалы" />
        <div class="container">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                        <Spinner />
                    </Flex>
                }
            >
                <div class="branches__grid">
                    <For
                        each=move || items.get()
                        key=|row| row.id
                        children=|row| view! {
                            <A href=filial_details_path(row.id) attr:class="branches__item">
                                <h3 class="branches__name">{row.name}</h3>
                                <span class="branches__address">{row.address}</span>
                            </A>
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
