//! Прейскурант дополнительных услуг: строки из CMS и сборка таблицы.

pub mod aggregate;
pub mod table;

pub use aggregate::{PriceLineItem, PriceValue};
pub use table::{build_price_table, PriceCell, PriceRow, PriceTable, PRICE_COLUMNS};
