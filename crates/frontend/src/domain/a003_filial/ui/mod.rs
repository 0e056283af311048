mod details;
mod list;
mod map;

pub use details::FilialDetails;
pub use list::FilialList;
pub use map::FilialMap;
