pub mod analytics;
pub mod catalog;
