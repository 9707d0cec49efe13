//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod explorer;
pub mod footer;
pub mod header;
pub mod logs;
pub mod summary;
