use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::{
    id::{SpaceId, UserId},
    rental::Rental,
    space::{
        event::{CreateSpace, DeleteSpace},
        Space,
    },
};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{rental::RentalRow, space::SpaceRow},
    ConnectionPool,
};

#[derive(new)]
pub struct SpaceRepositoryImpl {
    db: ConnectionPool,
}

const SELECT_SPACE: &str = r#"
    SELECT
        s.space_id,
        s.space_name,
        s.shared,
        s.width,
        s.height,
        s.price_hour,
        s.price_day,
        s.price_month,
        s.start_hour,
        s.end_hour,
        s.initial_date,
        s.final_date,
        s.owned_by,
        u.user_name AS owner_name
    FROM spaces AS s
    INNER JOIN users AS u ON s.owned_by = u.user_id
"#;

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn create(&self, event: CreateSpace, owner_id: UserId) -> AppResult<SpaceId> {
        let space_id = SpaceId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO spaces
                (space_id, space_name, owned_by, shared, width, height,
                 price_hour, price_day, price_month, start_hour, end_hour,
                 initial_date, final_date)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(space_id)
        .bind(&event.space_name)
        .bind(owner_id)
        .bind(event.shared)
        .bind(event.width)
        .bind(event.height)
        .bind(event.price_hour)
        .bind(event.price_day)
        .bind(event.price_month)
        .bind(event.start_hour)
        .bind(event.end_hour)
        .bind(event.initial_date)
        .bind(event.final_date)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no space record has been created".into(),
            ));
        }

        Ok(space_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Space>> {
        let rows: Vec<SpaceRow> =
            sqlx::query_as(&format!("{SELECT_SPACE} ORDER BY s.created_at DESC"))
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Space::from).collect())
    }

    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>> {
        let row: Option<SpaceRow> =
            sqlx::query_as(&format!("{SELECT_SPACE} WHERE s.space_id = $1"))
                .bind(space_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Space::from))
    }

    async fn find_with_active_rentals(
        &self,
        space_id: SpaceId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Space>> {
        let row: Option<SpaceRow> =
            sqlx::query_as(&format!("{SELECT_SPACE} WHERE s.space_id = $1"))
                .bind(space_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let rental_rows: Vec<RentalRow> = sqlx::query_as(
            r#"
                SELECT
                    rental_id, space_id, rented_by, rental_type,
                    initial_date, final_date, meters, cost, rented_at
                FROM rentals
                WHERE space_id = $1 AND final_date > $2
            "#,
        )
        .bind(space_id)
        .bind(now)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let rentals = rental_rows
            .into_iter()
            .map(Rental::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Some(row.into_space(rentals)))
    }

    async fn delete(&self, event: DeleteSpace) -> AppResult<()> {
        // only the owner may unlist a space
        let res = sqlx::query("DELETE FROM spaces WHERE space_id = $1 AND owned_by = $2")
            .bind(event.space_id)
            .bind(event.requested_user)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified space not found or not owned by the caller".into(),
            ));
        }

        Ok(())
    }
}
