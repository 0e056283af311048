pub mod cms;
pub mod date_utils;
pub mod number_format;
pub mod site_config;
