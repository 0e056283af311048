mod details;
mod list;

pub use details::SpecialProjectDetails;
pub use list::SpecialProjectList;
