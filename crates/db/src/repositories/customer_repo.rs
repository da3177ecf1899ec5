//! Repository for the `customers` table.

use interaction_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer};

const COLUMNS: &str = "id, date_of_termination, created_at";

/// Read access to customers, plus inserts for seeding.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer with a freshly generated id.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (id, date_of_termination)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(DbId::new_v4())
            .bind(input.date_of_termination)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a customer with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM customers WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether the customer has been terminated. Unknown customers are not read-only.
    pub async fn is_read_only(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let customer = Self::find_by_id(pool, id).await?;
        Ok(customer.is_some_and(|c| c.is_read_only()))
    }
}
