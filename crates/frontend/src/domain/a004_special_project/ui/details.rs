use crate::domain::a004_special_project::api::fetch_special_project;
use crate::layout::global_context::use_site_context;
use crate::layout::top_image::TopImage;
use contracts::domain::a004_special_project::{SpecialProject, SPECIAL_PROJECTS_PATH};
use contracts::shared::date_utils::format_date;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[component]
pub fn SpecialProjectDetails() -> impl IntoView {
    let site = use_site_context();
    let params = use_params_map();
    let (project, set_project) = signal::<Option<SpecialProject>>(None);
    let (loading, set_loading) = signal(true);

    site.with_config(move |config| {
        let Some(id) = params.read().get("id") else {
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_special_project(&config, &id).await {
                Ok(p) => set_project.set(Some(p)),
                Err(e) => {
                    log::error!("Ошибка при загрузке проекта {}: {}", id, e);
                    set_project.set(None);
                }
            }
            set_loading.set(false);
        });
    });

    let image = move || {
        let config = site.config.get();
        project.with(|p| {
            p.as_ref()
                .and_then(|p| p.main_photo.as_ref())
                .map(|m| config.media_url(&m.url))
        })
    };

    view! {
        <TopImage title="Специальные проекты" />
        <div class="container inner-post">
            <A href=SPECIAL_PROJECTS_PATH attr:class="button__back">"Назад"</A>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <Spinner /> }
            >
                {move || project.get().map(|p| {
                    let date = p.date_event.as_deref().and_then(format_date);
                    view! {
                        <h1 class="inner-post__title">{p.title.clone()}</h1>
                        {date.map(|d| view! { <span class="inner-post__date">{d}</span> })}
                        {image().map(|src| view! {
                            <img class="inner-post__image" alt=p.title.clone() src=src />
                        })}
                        <div class="text-area">
                            {p.description_paragraphs()
                                .into_iter()
                                .map(|text| view! { <p>{text}</p> })
                                .collect_view()}
                        </div>
                    }
                })}
            </Show>
        </div>
    }
}
