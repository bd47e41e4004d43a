use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::{
    id::{RentalId, SpaceId, UserId},
    rental::{Rental, RentalType},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct RentalRow {
    pub rental_id: RentalId,
    pub space_id: SpaceId,
    pub rented_by: UserId,
    pub rental_type: String,
    pub initial_date: DateTime<Utc>,
    pub final_date: DateTime<Utc>,
    pub meters: f64,
    pub cost: f64,
    pub rented_at: DateTime<Utc>,
}

impl TryFrom<RentalRow> for Rental {
    type Error = AppError;

    fn try_from(value: RentalRow) -> Result<Self, Self::Error> {
        let RentalRow {
            rental_id,
            space_id,
            rented_by,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            rented_at,
        } = value;
        let rental_type = RentalType::from_str(&rental_type).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown rental type: {rental_type}"))
        })?;
        Ok(Rental {
            rental_id,
            space_id,
            rented_by,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            rented_at,
        })
    }
}
