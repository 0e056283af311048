use contracts::domain::a001_feedback::{
    FeedbackFormState, FormField, FormFieldValues, IssueCategory, PreviewState,
};
use leptos::prelude::*;

/// ViewModel формы обратной связи
#[derive(Clone, Copy)]
pub struct FeedbackFormViewModel {
    pub state: RwSignal<FeedbackFormState>,
    pub values: RwSignal<FormFieldValues>,
    pub consent: RwSignal<bool>,
    /// Последнее собранное письмо и окно предпросмотра
    pub preview: RwSignal<PreviewState>,
}

impl FeedbackFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FeedbackFormState::default()),
            values: RwSignal::new(FormFieldValues::new()),
            consent: RwSignal::new(false),
            preview: RwSignal::new(PreviewState::default()),
        }
    }

    pub fn category_options() -> Vec<(String, String)> {
        IssueCategory::all()
            .into_iter()
            .map(|c| (c.code().to_string(), c.option_label().to_string()))
            .collect()
    }

    pub fn sub_issue_options(&self) -> Vec<(String, String)> {
        self.state
            .get()
            .category()
            .map(|c| {
                c.sub_issues()
                    .iter()
                    .map(|s| (s.code().to_string(), s.label().to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn category_code(&self) -> String {
        self.state
            .get()
            .category()
            .map(|c| c.code().to_string())
            .unwrap_or_default()
    }

    pub fn sub_issue_code(&self) -> String {
        self.state.get().sub_issue_code().to_string()
    }

    pub fn select_category(&self, code: String) {
        self.state
            .update(|s| s.select_category(IssueCategory::from_code(&code)));
    }

    pub fn select_sub_issue(&self, code: String) {
        self.state.update(|s| s.select_sub_issue(&code));
    }

    pub fn field_value(&self, field: FormField) -> String {
        self.values.with(|v| v.get(field).to_string())
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.values.update(|v| v.set(field, value));
    }

    /// Собирает письмо и открывает предпросмотр. Возвращает ссылку `mailto:`,
    /// по которой нужно перейти.
    pub fn submit_command(&self, recipient: &str) -> String {
        let state = self.state.get_untracked();
        let values = self.values.get_untracked();
        let mut mailto = String::new();
        self.preview.update(|p| {
            mailto = p.submit(&state, &values, recipient);
            if let Some(s) = p.visible() {
                log::debug!(
                    "Feedback composed: {} ({} chars)",
                    s.preview_title(),
                    s.preview_body().chars().count()
                );
            }
        });
        mailto
    }

    pub fn close_preview(&self) {
        self.preview.update(PreviewState::close);
    }
}

impl Default for FeedbackFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
