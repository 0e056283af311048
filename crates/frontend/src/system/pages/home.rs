use crate::layout::global_context::use_site_context;
use crate::layout::top_image::TopImage;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

struct Section {
    href: &'static str,
    title: &'static str,
    text: &'static str,
}

const SECTIONS: [Section; 3] = [
    Section {
        href: "/filials",
        title: "Филиалы",
        text: "Адреса, графики работы и телефоны филиалов и производственных отделений",
    },
    Section {
        href: "/specialProjects",
        title: "Специальные проекты",
        text: "Социальные и образовательные проекты компании",
    },
    Section {
        href: "/additionalServices",
        title: "Дополнительные услуги",
        text: "Перечень услуг, бланки заявок и стоимость",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site_context();

    view! {
        <TopImage title="Потребителям" />
        <div class="container">
            <Flex gap=FlexGap::Large style="flex-wrap: wrap;">
                {SECTIONS
                    .iter()
                    .map(|s| view! {
                        <A href=s.href attr:class="home-section">
                            <Card>
                                <h2 class="home-section__title">{s.title}</h2>
                                <p class="home-section__text">{s.text}</p>
                            </Card>
                        </A>
                    })
                    .collect_view()}
            </Flex>
            <p class="home-feedback">
                "Сообщить о проблеме или задать вопрос можно через "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    site.open_feedback();
                }>"форму обратной связи"</a>
                "."
            </p>
        </div>
    }
}
