//! Customer entity model and DTOs.
//!
//! Only the fields the interaction workflow consults are modelled here.

use interaction_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub date_of_termination: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Customer {
    /// Terminated customers can be read but not modified.
    pub fn is_read_only(&self) -> bool {
        self.date_of_termination.is_some()
    }
}

/// DTO for creating a new customer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCustomer {
    pub date_of_termination: Option<Timestamp>,
}
