use super::map::FilialMap;
use crate::domain::a003_filial::api::fetch_filial;
use crate::layout::global_context::use_site_context;
use crate::layout::top_image::TopImage;
use crate::shared::icons::icon;
use contracts::domain::a003_filial::{
    Contact, Filial, ProductionDepartment, ServiceNotice, WorkScheduleEntry,
};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn FilialDetails() -> impl IntoView {
    let site = use_site_context();
    let params = use_params_map();
    let (filial, set_filial) = signal::<Option<Filial>>(None);

    site.with_config(move |config| {
        let Some(id) = params.read().get("id") else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_filial(&config, &id).await {
                Ok(entity) => set_filial.set(Some(entity.attributes)),
                Err(e) => {
                    log::error!("Ошибка при загрузке филиала {}: {}", id, e);
                    set_filial.set(None);
                }
            }
        });
    });

    let placemarks = Signal::derive(move || {
        filial.with(|f| f.as_ref().map(Filial::placemarks).unwrap_or_default())
    });

    view! {
        <TopImage title="Информация о компании" />
        <section class="inner-post">
            <div class="container">
                <div class="inner-post__up">
                    <A href="/filials" attr:class="button__back">"Назад"</A>
                    {move || filial.get().map(|f| view! { <FilialHeader filial=f /> })}
                </div>
                <div class="inner-post__middle">
                    {move || filial.get().map(|f| view! {
                        <div class="branches__grid-sm">
                            {f.kontakties.items().cloned().map(|c| view! { <ContactCard contact=c /> }).collect_view()}
                        </div>
                        {f.departments().cloned().map(|d| view! { <DepartmentRow department=d /> }).collect_view()}
                    })}
                </div>
            </div>
        </section>
        <FilialMap placemarks=placemarks site=site.config />
    }
}

#[component]
fn FilialHeader(filial: Filial) -> impl IntoView {
    let notice = filial.service_notice();

    view! {
        <h1 class="inner-post__title">{filial.name.clone()}</h1>
        <span class="inner-post__date">{filial.address.clone().unwrap_or_default()}</span>
        <WorkSchedule entries=filial.work_schedule.clone() />
        {notice.map(|n| view! { <ServiceNoticeBlock notice=n /> })}
    }
}

#[component]
fn WorkSchedule(entries: Vec<WorkScheduleEntry>) -> impl IntoView {
    view! {
        <div class="work-schedule">
            {entries
                .into_iter()
                .map(|e| view! {
                    <p>
                        <span>{e.days}" - "</span>
                        <strong>{e.times}</strong>
                    </p>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ServiceNoticeBlock(notice: ServiceNotice) -> impl IntoView {
    view! {
        <p class="service-notice">
            <b>{notice.greeting}</b>
            " "
            {notice.message}
            " "
            <b>{notice.hotline_label}</b>
            {notice.connection_prefix}
            " "
            <b>{notice.connection_phone}</b>
            "."
            <br />
            {notice.apology}
        </p>
    }
}

#[component]
fn ContactCard(contact: Contact) -> impl IntoView {
    let href = contact.tel_href();

    view! {
        <div class="positions-post">
            <h4 class="positions-post__name">{contact.post}</h4>
            <span class="positions-post__tel">
                {icon("phone")}
                "тел.: "
                <a href=href>{contact.tel}</a>
            </span>
        </div>
    }
}

/// Отделение в виде раскрывающейся строки
#[component]
fn DepartmentRow(department: ProductionDepartment) -> impl IntoView {
    let (open, set_open) = signal(false);
    let contacts: Vec<Contact> = department.kontakties.items().cloned().collect();

    view! {
        <div class=move || if open.get() { "accordion-row open-accordion" } else { "accordion-row" }>
            <div class="accordion-row__up" on:click=move |_| set_open.update(|o| *o = !*o)>
                <span class="accordion-row__text">{department.name}</span>
                <span class="accordion-row__arrow">{icon("chevron-down")}</span>
            </div>
            <Show when=move || open.get()>
                <div class="accordion-row__drop-down">
                    <p>"Адрес: "<em>{department.address.clone().unwrap_or_default()}</em></p>
                    <WorkSchedule entries=department.work_schedule.clone() />
                    <div class="accordion-row__grid">
                        {contacts.clone().into_iter().map(|c| view! { <ContactCard contact=c /> }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
