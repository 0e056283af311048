//! Окно обратной связи
//!
//! - view_model.rs: состояние формы и команда отправки
//! - view.rs: разметка окна

mod view;
mod view_model;

pub use view::FeedbackModal;
pub use view_model::FeedbackFormViewModel;
