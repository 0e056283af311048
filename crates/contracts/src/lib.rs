//! Общие типы сайта: контент CMS, форма обратной связи, прейскурант.
//!
//! Крейт не зависит от браузера и компилируется нативно, поэтому вся
//! логика, которую можно проверить тестами, живёт здесь.

pub mod domain;
pub mod shared;
