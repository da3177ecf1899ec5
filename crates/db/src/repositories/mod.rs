//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod interaction_repo;

pub use customer_repo::CustomerRepo;
pub use interaction_repo::InteractionRepo;
