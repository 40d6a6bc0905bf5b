//! Routing module
//!
//! Holds the fixed clean-URL route table consulted before any file lookup.

mod table;

pub use table::RouteTable;
