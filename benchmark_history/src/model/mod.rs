//!
//! The benchmark history data model.
//!

pub mod entry;
pub mod history;
