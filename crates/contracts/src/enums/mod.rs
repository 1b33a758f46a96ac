pub mod service_category;
