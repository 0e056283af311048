mod table;

pub use table::PriceTableView;
