pub mod a001_feedback;
pub mod a002_price_list;
pub mod a003_filial;
pub mod a004_special_project;
pub mod a005_additional_services;
