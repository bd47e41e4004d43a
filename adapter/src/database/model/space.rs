use chrono::{DateTime, NaiveTime, Utc};
use kernel::model::{
    id::{SpaceId, UserId},
    rental::Rental,
    space::Space,
    user::SpaceOwner,
};

#[derive(sqlx::FromRow)]
pub struct SpaceRow {
    pub space_id: SpaceId,
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
    pub owned_by: UserId,
    pub owner_name: String,
}

impl SpaceRow {
    pub fn into_space(self, rentals: Vec<Rental>) -> Space {
        let SpaceRow {
            space_id,
            space_name,
            shared,
            width,
            height,
            price_hour,
            price_day,
            price_month,
            start_hour,
            end_hour,
            initial_date,
            final_date,
            owned_by,
            owner_name,
        } = self;
        Space {
            space_id,
            space_name,
            owner: SpaceOwner {
                owner_id: owned_by,
                owner_name,
            },
            shared,
            width,
            height,
            price_hour,
            price_day,
            price_month,
            start_hour,
            end_hour,
            initial_date,
            final_date,
            rentals,
        }
    }
}

impl From<SpaceRow> for Space {
    fn from(value: SpaceRow) -> Self {
        // listings carry no rental detail
        value.into_space(Vec::new())
    }
}
