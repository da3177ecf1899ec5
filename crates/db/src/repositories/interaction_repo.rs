//! Repository for the `interactions` table.

use interaction_core::types::DbId;
use sqlx::PgPool;

use crate::models::interaction::{CreateInteraction, Interaction};

const COLUMNS: &str = "id, customer_id, touchpoint_id, adviser_details_id, \
     date_and_time_of_interaction, channel, interaction_type, \
     last_modified_date, last_modified_touchpoint_id";

/// Provides lookup and replace operations for interactions.
pub struct InteractionRepo;

impl InteractionRepo {
    /// Insert a new interaction, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInteraction,
    ) -> Result<Interaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO interactions
                (id, customer_id, touchpoint_id, adviser_details_id,
                 date_and_time_of_interaction, channel, interaction_type,
                 last_modified_date, last_modified_touchpoint_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(DbId::new_v4())
            .bind(input.customer_id)
            .bind(&input.touchpoint_id)
            .bind(input.adviser_details_id)
            .bind(input.date_and_time_of_interaction)
            .bind(input.channel)
            .bind(input.interaction_type)
            .fetch_one(pool)
            .await
    }

    /// Find an interaction by id, but only if it belongs to `customer_id`.
    pub async fn find_for_customer(
        pool: &PgPool,
        customer_id: DbId,
        id: DbId,
    ) -> Result<Option<Interaction>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM interactions WHERE id = $1 AND customer_id = $2");
        sqlx::query_as::<_, Interaction>(&query)
            .bind(id)
            .bind(customer_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable column of an existing interaction.
    ///
    /// The row is matched on both `id` and `customer_id`. Returns `None` if
    /// no such row exists.
    pub async fn replace(
        pool: &PgPool,
        interaction: &Interaction,
    ) -> Result<Option<Interaction>, sqlx::Error> {
        let query = format!(
            "UPDATE interactions SET
                adviser_details_id = $3,
                date_and_time_of_interaction = $4,
                channel = $5,
                interaction_type = $6,
                last_modified_date = $7,
                last_modified_touchpoint_id = $8
             WHERE id = $1 AND customer_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(interaction.id)
            .bind(interaction.customer_id)
            .bind(interaction.adviser_details_id)
            .bind(interaction.date_and_time_of_interaction)
            .bind(interaction.channel)
            .bind(interaction.interaction_type)
            .bind(interaction.last_modified_date)
            .bind(&interaction.last_modified_touchpoint_id)
            .fetch_optional(pool)
            .await
    }
}
