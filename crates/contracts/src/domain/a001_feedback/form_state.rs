use super::field::FormField;
use super::issue::{IssueCategory, SubIssue};

/// Состояние выбора темы в форме обратной связи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackFormState {
    #[default]
    NoCategorySelected,
    CategorySelected(IssueCategory),
    SubCategorySelected(IssueCategory, SubIssue),
}

impl FeedbackFormState {
    /// Смена темы всегда сбрасывает подтему
    pub fn select_category(&mut self, category: Option<IssueCategory>) {
        *self = match category {
            Some(c) => FeedbackFormState::CategorySelected(c),
            None => FeedbackFormState::NoCategorySelected,
        };
    }

    /// Выбор подтемы по коду из `<select>`.
    ///
    /// Пустой код возвращает к выбранной теме без подтемы; код, не относящийся
    /// к текущей теме, игнорируется.
    pub fn select_sub_issue(&mut self, code: &str) {
        let Some(category) = self.category() else {
            return;
        };
        if code.is_empty() {
            *self = FeedbackFormState::CategorySelected(category);
            return;
        }
        if let Some(sub) = SubIssue::from_code(code) {
            if category.sub_issues().contains(&sub) {
                *self = FeedbackFormState::SubCategorySelected(category, sub);
            }
        }
    }

    pub fn category(&self) -> Option<IssueCategory> {
        match self {
            FeedbackFormState::NoCategorySelected => None,
            FeedbackFormState::CategorySelected(c)
            | FeedbackFormState::SubCategorySelected(c, _) => Some(*c),
        }
    }

    pub fn sub_issue(&self) -> Option<SubIssue> {
        match self {
            FeedbackFormState::SubCategorySelected(_, s) => Some(*s),
            _ => None,
        }
    }

    /// Код подтемы, пустая строка если не выбрана
    pub fn sub_issue_code(&self) -> &'static str {
        self.sub_issue().map(|s| s.code()).unwrap_or("")
    }

    pub fn shows_sub_issue_selector(&self) -> bool {
        self.category().is_some_and(|c| c.has_sub_issues())
    }

    pub fn visible_fields(&self) -> Vec<FormField> {
        match self.category() {
            Some(c) => c.visible_fields(self.sub_issue()),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_shows_nothing() {
        let st = FeedbackFormState::default();
        assert_eq!(st.category(), None);
        assert!(st.visible_fields().is_empty());
        assert!(!st.shows_sub_issue_selector());
    }

    #[test]
    fn test_category_change_clears_sub_issue() {
        let mut st = FeedbackFormState::default();
        st.select_category(Some(IssueCategory::CarElectricChargingStations));
        st.select_sub_issue("malfunction");
        assert_eq!(st.sub_issue(), Some(SubIssue::Malfunction));

        st.select_category(Some(IssueCategory::MalfunctionOfPowerLines));
        assert_eq!(st.sub_issue(), None);
        assert_eq!(st.sub_issue_code(), "");

        st.select_sub_issue("pruning");
        st.select_category(None);
        assert_eq!(st, FeedbackFormState::NoCategorySelected);
    }

    #[test]
    fn test_reselecting_same_category_also_clears_sub_issue() {
        let mut st = FeedbackFormState::default();
        st.select_category(Some(IssueCategory::MalfunctionOfPowerLines));
        st.select_sub_issue("wireBreak");
        st.select_category(Some(IssueCategory::MalfunctionOfPowerLines));
        assert_eq!(
            st,
            FeedbackFormState::CategorySelected(IssueCategory::MalfunctionOfPowerLines)
        );
    }

    #[test]
    fn test_sub_issue_ignored_for_plain_categories() {
        let mut st = FeedbackFormState::default();
        st.select_category(Some(IssueCategory::PowerOutage));
        st.select_sub_issue("pruning");
        assert_eq!(st, FeedbackFormState::CategorySelected(IssueCategory::PowerOutage));
        assert!(!st.shows_sub_issue_selector());
    }

    #[test]
    fn test_sub_issue_of_other_category_ignored() {
        let mut st = FeedbackFormState::default();
        st.select_category(Some(IssueCategory::CarElectricChargingStations));
        st.select_sub_issue("pruning");
        assert_eq!(st.sub_issue(), None);
    }

    #[test]
    fn test_sub_issue_gates_fields() {
        let mut st = FeedbackFormState::default();
        st.select_category(Some(IssueCategory::CarElectricChargingStations));
        assert!(st.shows_sub_issue_selector());
        assert!(st.visible_fields().is_empty());

        st.select_sub_issue("installation");
        assert_eq!(st.visible_fields().len(), 4);

        st.select_sub_issue("");
        assert!(st.visible_fields().is_empty());
    }

    #[test]
    fn test_sub_issue_without_category_is_noop() {
        let mut st = FeedbackFormState::default();
        st.select_sub_issue("malfunction");
        assert_eq!(st, FeedbackFormState::NoCategorySelected);
    }
}
