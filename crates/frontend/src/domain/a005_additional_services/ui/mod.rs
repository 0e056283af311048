mod page;

pub use page::AdditionalServicesPage;
