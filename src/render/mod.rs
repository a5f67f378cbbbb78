//! Console presentation of catalog data: grid tables and text charts.

pub mod chart;
pub mod table;

pub use table::TableStyle;
