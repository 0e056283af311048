mod form;
mod preview;

pub use form::{FeedbackFormViewModel, FeedbackModal};
pub use preview::FeedbackPreview;
