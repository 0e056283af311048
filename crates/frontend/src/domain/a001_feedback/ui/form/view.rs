use super::view_model::FeedbackFormViewModel;
use crate::domain::a001_feedback::ui::preview::FeedbackPreview;
use crate::layout::global_context::use_site_context;
use crate::shared::components::ui::{Button, Checkbox, Input, Select, Textarea};
use crate::shared::modal::Modal;
use contracts::domain::a001_feedback::issue::AdditionalServicesHint;
use contracts::domain::a001_feedback::{FormField, InputKind, IssueCategory};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn FeedbackModal(on_close: Callback<()>) -> impl IntoView {
    let vm = FeedbackFormViewModel::new();
    let site = use_site_context();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let recipient = site.config.get_untracked().support_email;
        let mailto = vm.submit_command(&recipient);
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(&mailto) {
                    log::error!("Cannot open mail client: {:?}", e);
                }
            }
            None => log::error!("Cannot open mail client: no window"),
        }
    };

    view! {
        <Modal title="Обратная связь" on_close=on_close class="feedback-modal">
            <form class="feedback-form" on:submit=handle_submit>
                <Select
                    name="issue"
                    placeholder="Выберите вопрос"
                    value=Signal::derive(move || vm.category_code())
                    options=FeedbackFormViewModel::category_options()
                    on_change=Callback::new(move |code| vm.select_category(code))
                />

                <Show when=move || vm.state.get().shows_sub_issue_selector()>
                    <Select
                        name="subIssue"
                        placeholder="Выберите подтему"
                        value=Signal::derive(move || vm.sub_issue_code())
                        options=Signal::derive(move || vm.sub_issue_options())
                        on_change=Callback::new(move |code| vm.select_sub_issue(code))
                    />
                </Show>

                <For
                    each=move || {
                        let state = vm.state.get();
                        state
                            .category()
                            .map(|c| {
                                state
                                    .visible_fields()
                                    .into_iter()
                                    .map(|f| (f, c))
                                    .collect::<Vec<_>>()
                            })
                            .unwrap_or_default()
                    }
                    key=|(field, category)| (*field, *category)
                    children=move |(field, category)| view! {
                        <FeedbackField vm=vm field=field category=category />
                    }
                />

                {move || {
                    vm.state
                        .get()
                        .category()
                        .and_then(|c| c.hint())
                        .map(|hint| view! { <AdditionalServicesNote hint=hint /> })
                }}

                <Checkbox
                    id="feedback-consent"
                    checked=vm.consent
                    required=true
                    on_change=Callback::new(move |checked| vm.consent.set(checked))
                >
                    "Отправляя письмо, Вы даете согласие на обработку персональных данных, а также несете ответственность за полноту и достоверность предоставленной информации."
                </Checkbox>

                <p class="feedback-form__disclaimer">
                    "* При регистрации заявитель должен подтвердить свое согласие на обработку персональных данных."
                </p>
                <p class="feedback-form__disclaimer">
                    "* Федеральный закон Nº59-ФЗ от 02.05.2006 о порядке рассмотрения обращений граждан Российской Федерации."
                </p>

                <Button button_type="submit" class="feedback-form__send">
                    "Отправить"
                </Button>
            </form>
            <Button
                variant="secondary"
                class="feedback-form__close"
                on_click=Callback::new(move |_| on_close.run(()))
            >
                "Закрыть"
            </Button>
        </Modal>

        {move || {
            vm.preview.with(|p| {
                p.visible().map(|submission| {
                    let title = submission.preview_title().to_string();
                    let body = submission.preview_body().to_string();
                    view! {
                        <FeedbackPreview
                            title=title
                            body=body
                            on_close=Callback::new(move |_| vm.close_preview())
                        />
                    }
                })
            })
        }}
    }
}

/// Одно поле формы; вид ввода и подпись зависят от темы
#[component]
fn FeedbackField(
    vm: FeedbackFormViewModel,
    field: FormField,
    category: IssueCategory,
) -> impl IntoView {
    let value = Signal::derive(move || vm.field_value(field));
    let on_input = Callback::new(move |v: String| vm.set_field(field, v));
    let label = field.label(category);
    let required = field.is_required();

    match field.input_kind(category) {
        InputKind::TextArea => view! {
            <Textarea
                name=field.name()
                placeholder=label
                value=value
                on_input=on_input
                required=required
            />
        }
        .into_any(),
        kind => view! {
            <Input
                name=field.name()
                input_type=kind.html_type().unwrap_or("text")
                placeholder=label
                value=value
                on_input=on_input
                required=required
            />
        }
        .into_any(),
    }
}

#[component]
fn AdditionalServicesNote(hint: AdditionalServicesHint) -> impl IntoView {
    view! {
        <p class="feedback-form__hint">
            {hint.intro}
            " "
            <a href=hint.catalogue_url target="_blank" rel="noopener noreferrer">
                {hint.catalogue_url}
            </a>
            ". "
            {hint.instructions}
            " "
            {hint.phones}
            ", или по e-mail: "
            <a href=format!("mailto:{}", hint.email)>{hint.email}</a>
            "."
        </p>
    }
}
