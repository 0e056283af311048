use crate::domain::a004_special_project::api::fetch_special_projects;
use crate::layout::global_context::use_site_context;
use crate::layout::top_image::TopImage;
use contracts::domain::a004_special_project::{sort_cards, SpecialProjectCard};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn SpecialProjectList() -> impl IntoView {
    let site = use_site_context();
    let (cards, set_cards) = signal::<Vec<SpecialProjectCard>>(Vec::new());
    let (loading, set_loading) = signal(true);

    site.with_config(move |config| {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_special_projects(&config).await {
                Ok(projects) => {
                    let mut list: Vec<SpecialProjectCard> = projects
                        .iter()
                        .map(|p| SpecialProjectCard::from_project(p, &config))
                        .collect();
                    sort_cards(&mut list);
                    set_cards.set(list);
                }
                Err(e) => log::error!("Ошибка при загрузке данных: {}", e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                    <Spinner />
                </Flex>
            }
        >
            <TopImage title="Специальные проекты" />
            <div class="container">
                <Flex gap=FlexGap::Large style="flex-wrap: wrap; align-items: stretch;">
                    <For
                        each=move || cards.get()
                        key=|card| card.id
                        children=|card| view! { <ProjectCard card=card /> }
                    />
                </Flex>
            </div>
        </Show>
    }
}

#[component]
fn ProjectCard(card: SpecialProjectCard) -> impl IntoView {
    let navigate = use_navigate();
    let link = card.link.clone();
    let alt = card.title.clone();

    view! {
        <div class="special-project-card" on:click=move |_| navigate(&link, Default::default())>
            <Card>
                {card.image.map(|src| view! {
                    <div class="special-project-card__cover">
                        <img alt=alt src=src />
                    </div>
                })}
                <h2 class="special-project-card__title">{card.title}</h2>
                <p class="special-project-card__date">{card.date.unwrap_or_else(|| " ".to_string())}</p>
                <p class="special-project-card__text">{card.short_description}</p>
            </Card>
        </div>
    }
}
