//! Request handlers.
//!
//! Handlers orchestrate the collaborators in [`AppState`](crate::state::AppState)
//! and map every outcome through [`AppError`](crate::error::AppError).

pub mod interaction;
