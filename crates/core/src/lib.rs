//! Domain building blocks shared by the database and API crates.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod types;
pub mod validation;
