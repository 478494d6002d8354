//! Services orchestrating the catalog pipeline.

mod catalog_service;

pub use catalog_service::Catalog;
