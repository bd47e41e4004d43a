use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::model::id::{SpaceId, UserId};

#[derive(Debug)]
pub struct CreateSpace {
    pub space_name: String,
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
}

impl CreateSpace {
    /// An hourly price requires both hour bounds, at least one hour apart
    /// within the same day.
    pub fn hour_window_is_valid(&self) -> bool {
        match (self.price_hour, self.start_hour, self.end_hour) {
            (None, _, _) => true,
            (Some(_), Some(start), Some(end)) => end - start >= Duration::hours(1),
            (Some(_), _, _) => false,
        }
    }
}

#[derive(Debug)]
pub struct DeleteSpace {
    pub space_id: SpaceId,
    pub requested_user: UserId,
}
