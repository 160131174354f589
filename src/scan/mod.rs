//! Scan module - entry filtering and tree collection
//!
//! The filter decides per entry whether it belongs in the output document;
//! the collector walks the tree, applies the filter, and reads contents.

pub mod collector;
pub mod filter;
