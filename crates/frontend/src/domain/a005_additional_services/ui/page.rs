use crate::domain::a002_price_list::api::fetch_price_list;
use crate::domain::a002_price_list::ui::PriceTableView;
use crate::domain::a005_additional_services::api::fetch_sections;
use crate::layout::global_context::use_site_context;
use crate::layout::top_image::TopImage;
use crate::shared::icons::icon;
use contracts::domain::a005_additional_services::{build_catalogue, FileLink, ServiceCatalogueEntry};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone)]
struct SectionView {
    entry: ServiceCatalogueEntry,
    file: Option<FileLink>,
}

#[component]
pub fn AdditionalServicesPage() -> impl IntoView {
    let site = use_site_context();
    let (sections, set_sections) = signal::<Vec<SectionView>>(Vec::new());
    let (loading, set_loading) = signal(true);

    site.with_config(move |config| {
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = match fetch_sections(&config).await {
                Ok(list) => list,
                Err(e) => {
                    log::error!("Ошибка при загрузке разделов услуг: {}", e);
                    Vec::new()
                }
            };
            let prices = match fetch_price_list(&config).await {
                Ok(items) => items,
                Err(e) => {
                    log::error!("Ошибка при загрузке прейскуранта: {}", e);
                    Vec::new()
                }
            };

            let views = build_catalogue(loaded, &prices)
                .into_iter()
                .map(|entry| SectionView {
                    file: entry.section.file_link(&config),
                    entry,
                })
                .collect();
            set_sections.set(views);
            set_loading.set(false);
        });
    });

    view! {
        <TopImage title="Дополнительные услуги" />
        <div class="container additional-services">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                        <Spinner />
                    </Flex>
                }
            >
                <For
                    each=move || sections.get()
                    key=|s| s.entry.section.id
                    children=|s| view! { <ServiceSection section=s /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn ServiceSection(section: SectionView) -> impl IntoView {
    let SectionView { entry, file } = section;

    view! {
        <section class="additional-services__section">
            <h2 class="additional-services__title">{entry.section.name}</h2>
            {entry.section.description.map(|d| view! {
                <p class="additional-services__description">{d}</p>
            })}
            {file.map(|f| view! {
                <a class="additional-services__file" href=f.href target="_blank" rel="noopener noreferrer">
                    {icon("download")}
                    {f.title}
                    {(!f.kind.is_empty()).then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {f.kind}
                        </Badge>
                    })}
                </a>
            })}
            {entry.table.map(|table| view! { <PriceTableView table=table /> })}
        </section>
    }
}
