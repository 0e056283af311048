use super::email::{compose_email, EmailDraft};
use super::field::FormFieldValues;
use super::form_state::FeedbackFormState;
use super::mailto::build_mailto;

/// Результат отправки формы: письмо для окна предпросмотра и ссылка для
/// почтового клиента. Обе части собраны из одного черновика.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSubmission {
    pub draft: EmailDraft,
    pub mailto: String,
}

impl FeedbackSubmission {
    pub fn prepare(state: &FeedbackFormState, values: &FormFieldValues, recipient: &str) -> Self {
        let draft = compose_email(state.category(), state.sub_issue_code(), values);
        let mailto = build_mailto(recipient, &draft);
        Self { draft, mailto }
    }

    /// Заголовок окна предпросмотра
    pub fn preview_title(&self) -> &str {
        &self.draft.subject
    }

    pub fn preview_body(&self) -> &str {
        &self.draft.body
    }
}

/// Окно предпросмотра письма: последнее отправленное письмо и признак
/// открытого окна.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewState {
    pub submission: Option<FeedbackSubmission>,
    pub is_open: bool,
}

impl PreviewState {
    /// Собирает письмо, запоминает его и открывает окно.
    /// Возвращает ссылку `mailto:` для почтового клиента.
    pub fn submit(
        &mut self,
        state: &FeedbackFormState,
        values: &FormFieldValues,
        recipient: &str,
    ) -> String {
        let submission = FeedbackSubmission::prepare(state, values, recipient);
        let mailto = submission.mailto.clone();
        self.submission = Some(submission);
        self.is_open = true;
        mailto
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Письмо для показа, пока окно открыто
    pub fn visible(&self) -> Option<&FeedbackSubmission> {
        self.submission.as_ref().filter(|_| self.is_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_feedback::field::FormField;
    use crate::domain::a001_feedback::issue::IssueCategory;
    use crate::domain::a001_feedback::mailto::decode_mailto_param;

    #[test]
    fn test_mailto_body_matches_preview_for_every_category() {
        let values = FormFieldValues::new()
            .with(FormField::FullName, "Петров П.П.")
            .with(FormField::Email, "p@example.ru")
            .with(FormField::Phone, "+7 900 000-00-00")
            .with(FormField::Address, "ул. Ленина, 1 & 2")
            .with(FormField::InquiryReason, "100% отключение?");

        for category in IssueCategory::all() {
            let mut state = FeedbackFormState::default();
            state.select_category(Some(category));
            if let Some(sub) = category.sub_issues().first() {
                state.select_sub_issue(sub.code());
            }

            let submission = FeedbackSubmission::prepare(&state, &values, "mail@mosoblenergo.ru");
            let decoded = decode_mailto_param(&submission.mailto, "body").unwrap();
            assert_eq!(decoded, submission.preview_body(), "category {}", category.code());
            assert_eq!(submission.preview_title(), category.display_name());
        }
    }

    #[test]
    fn test_submission_without_category_uses_fallback_subject() {
        let submission = FeedbackSubmission::prepare(
            &FeedbackFormState::default(),
            &FormFieldValues::new(),
            "mail@mosoblenergo.ru",
        );
        assert_eq!(
            decode_mailto_param(&submission.mailto, "subject").unwrap(),
            "Обращение в службу поддержки"
        );
    }

    #[test]
    fn test_sub_issue_from_state_reaches_body() {
        let mut state = FeedbackFormState::default();
        state.select_category(Some(IssueCategory::MalfunctionOfPowerLines));
        state.select_sub_issue("pillarCondition");
        let submission =
            FeedbackSubmission::prepare(&state, &FormFieldValues::new(), "mail@mosoblenergo.ru");
        assert!(submission
            .preview_body()
            .contains("Выбранная подтема: Состояние опор"));
    }

    #[test]
    fn test_submit_always_opens_preview() {
        let mut state = FeedbackFormState::default();
        state.select_category(Some(IssueCategory::all()[0]));
        let values = FormFieldValues::new().with(FormField::FullName, "Иванов И.И.");

        let mut preview = PreviewState::default();
        assert!(preview.visible().is_none());

        let mailto = preview.submit(&state, &values, "mail@mosoblenergo.ru");
        assert!(preview.is_open);
        let shown = preview.visible().unwrap();
        assert_eq!(shown.mailto, mailto);
        assert_eq!(decode_mailto_param(&mailto, "body").unwrap(), shown.preview_body());

        preview.close();
        assert!(preview.visible().is_none());

        // повторная отправка с пустой формой снова открывает окно
        let again = preview.submit(
            &FeedbackFormState::default(),
            &FormFieldValues::new(),
            "mail@mosoblenergo.ru",
        );
        assert!(preview.is_open);
        assert_eq!(preview.visible().unwrap().mailto, again);
    }
}
