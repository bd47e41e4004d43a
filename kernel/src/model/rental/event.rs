use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::{
    id::{RentalId, SpaceId, UserId},
    rental::RentalType,
};

#[derive(Debug, new)]
pub struct CreateRental {
    pub rental_id: RentalId,
    pub space_id: SpaceId,
    pub rented_by: UserId,
    pub rental_type: RentalType,
    pub initial_date: DateTime<Utc>,
    pub final_date: DateTime<Utc>,
    pub meters: f64,
    pub cost: f64,
    // commit-time "now" from the coordinator's clock; the repository
    // re-check measures rental expiry against this instant
    pub now: DateTime<Utc>,
}
