//! Module for additional computational capabilities
pub mod filter_data;
pub mod griddata;
pub mod test_helper;
pub mod uom_macros;
