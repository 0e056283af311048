//! Форма обратной связи: темы обращений, видимые поля, состав письма.

pub mod email;
pub mod field;
pub mod form_state;
pub mod issue;
pub mod mailto;
pub mod submission;

pub use email::{compose_email, EmailDraft};
pub use field::{FormField, FormFieldValues, InputKind};
pub use form_state::FeedbackFormState;
pub use issue::{IssueCategory, SubIssue};
pub use submission::{FeedbackSubmission, PreviewState};
