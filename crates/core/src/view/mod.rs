pub mod charts;
pub mod product;
