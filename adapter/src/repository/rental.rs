use async_trait::async_trait;
use derive_new::new;
use kernel::booking::availability;
use kernel::model::{
    id::UserId,
    rental::{event::CreateRental, Rental},
};
use kernel::repository::rental::RentalRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{rental::RentalRow, space::SpaceRow},
    ConnectionPool,
};

#[derive(new)]
pub struct RentalRepositoryImpl {
    db: ConnectionPool,
}

const SELECT_RENTALS: &str = r#"
    SELECT
        rental_id, space_id, rented_by, rental_type,
        initial_date, final_date, meters, cost, rented_at
    FROM rentals
"#;

#[async_trait]
impl RentalRepository for RentalRepositoryImpl {
    async fn create(&self, event: CreateRental) -> AppResult<Rental> {
        let mut tx = self.db.begin().await?;

        // The capacity re-check and the insert must be atomic per space.
        // Under SERIALIZABLE, two concurrent confirms against the same
        // space conflict instead of both observing the pre-write state
        // and both committing.
        self.set_transaction_serializable(&mut tx).await?;

        let space_row: Option<SpaceRow> = sqlx::query_as(
            r#"
                SELECT
                    s.space_id, s.space_name, s.shared, s.width, s.height,
                    s.price_hour, s.price_day, s.price_month,
                    s.start_hour, s.end_hour, s.initial_date, s.final_date,
                    s.owned_by, u.user_name AS owner_name
                FROM spaces AS s
                INNER JOIN users AS u ON s.owned_by = u.user_id
                WHERE s.space_id = $1
            "#,
        )
        .bind(event.space_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(space_row) = space_row else {
            return Err(AppError::EntityNotFound(format!(
                "space {} is not registered",
                event.space_id
            )));
        };

        let rental_rows: Vec<RentalRow> =
            sqlx::query_as(&format!("{SELECT_RENTALS} WHERE space_id = $1 AND final_date > $2"))
                .bind(event.space_id)
                .bind(event.now)
                .fetch_all(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        let rentals = rental_rows
            .into_iter()
            .map(Rental::try_from)
            .collect::<AppResult<Vec<_>>>()?;
        let space = space_row.into_space(rentals);

        availability::recheck_commit(
            event.initial_date,
            event.final_date,
            event.meters,
            event.rented_by,
            &space,
            event.now,
        )?;

        let res = sqlx::query(
            r#"
                INSERT INTO rentals
                (rental_id, space_id, rented_by, rental_type, initial_date,
                 final_date, meters, cost, rented_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(event.rental_id)
        .bind(event.space_id)
        .bind(event.rented_by)
        .bind(event.rental_type.to_string())
        .bind(event.initial_date)
        .bind(event.final_date)
        .bind(event.meters)
        .bind(event.cost)
        .bind(event.now)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no rental record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        let CreateRental {
            rental_id,
            space_id,
            rented_by,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            now,
        } = event;
        Ok(Rental {
            rental_id,
            space_id,
            rented_by,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            rented_at: now,
        })
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Rental>> {
        let rows: Vec<RentalRow> =
            sqlx::query_as(&format!("{SELECT_RENTALS} WHERE rented_by = $1 ORDER BY rented_at ASC"))
                .bind(user_id)
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Rental::try_from).collect()
    }
}

impl RentalRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{
        id::{RentalId, SpaceId},
        rental::RentalType,
        role::Role,
    };

    async fn register_user(pool: &sqlx::PgPool, name: &str) -> anyhow::Result<UserId> {
        let user_id = UserId::new();
        sqlx::query(
            "INSERT INTO users (user_id, user_name, email, password_hash, role) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user_id)
        .bind(name)
        .bind(format!("{name}@example.com"))
        .bind("hash")
        .bind(Role::User.as_ref())
        .execute(pool)
        .await?;
        Ok(user_id)
    }

    async fn register_space(
        pool: &sqlx::PgPool,
        owner_id: UserId,
        shared: bool,
    ) -> anyhow::Result<SpaceId> {
        let space_id = SpaceId::new();
        sqlx::query(
            r#"
                INSERT INTO spaces
                (space_id, space_name, owned_by, shared, width, height,
                 price_day, initial_date)
                VALUES ($1, $2, $3, $4, 10.0, 10.0, 56.0, '2020-01-01T00:00:00Z')
            "#,
        )
        .bind(space_id)
        .bind("Test Space")
        .bind(owner_id)
        .bind(shared)
        .execute(pool)
        .await?;
        Ok(space_id)
    }

    fn day_rental(space_id: SpaceId, renter_id: UserId, meters: f64) -> CreateRental {
        CreateRental::new(
            RentalId::new(),
            space_id,
            renter_id,
            RentalType::Day,
            "2030-02-01T00:00:00Z".parse().unwrap(),
            "2030-02-03T00:00:00Z".parse().unwrap(),
            meters,
            143.6432,
            "2030-01-01T00:00:00Z".parse().unwrap(),
        )
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "needs a running Postgres"]
    async fn commit_recheck_blocks_a_second_exclusive_rental(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let owner_id = register_user(&pool, "owner").await?;
        let first = register_user(&pool, "first").await?;
        let second = register_user(&pool, "second").await?;
        let space_id = register_space(&pool, owner_id, false).await?;

        let repo = RentalRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(day_rental(space_id, first, 100.0)).await?;

        let err = repo
            .create(day_rental(space_id, second, 100.0))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Space not available or space capacity exceeded"
        );

        let rentals = repo.find_by_user_id(first).await?;
        assert_eq!(rentals.len(), 1);
        assert_eq!(rentals[0].space_id, space_id);
        Ok(())
    }
}
