use chrono::{DateTime, NaiveTime, Utc};

use crate::model::{id::SpaceId, rental::Rental, user::SpaceOwner};

pub mod event;

/// A published storage space together with its currently known rentals.
/// `final_date` is absent for an open-ended availability window.
#[derive(Debug, Clone)]
pub struct Space {
    pub space_id: SpaceId,
    pub space_name: String,
    pub owner: SpaceOwner,
    pub shared: bool,
    pub width: f64,
    pub height: f64,
    pub price_hour: Option<f64>,
    pub price_day: Option<f64>,
    pub price_month: Option<f64>,
    pub start_hour: Option<NaiveTime>,
    pub end_hour: Option<NaiveTime>,
    pub initial_date: DateTime<Utc>,
    pub final_date: Option<DateTime<Utc>>,
    pub rentals: Vec<Rental>,
}

impl Space {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Rentals that have not yet expired at `now`.
    pub fn active_rentals(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Rental> {
        self.rentals.iter().filter(move |r| r.final_date > now)
    }
}
