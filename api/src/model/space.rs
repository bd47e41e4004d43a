use chrono::{DateTime, NaiveTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{SpaceId, UserId},
    space::{event::CreateSpace, Space},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    #[garde(length(min = 1))]
    pub space_name: String,
    #[garde(skip)]
    pub shared: bool,
    #[garde(range(min = 0.01))]
    pub width: f64,
    #[garde(range(min = 0.01))]
    pub height: f64,
    #[garde(skip)]
    pub price_hour: Option<f64>,
    #[garde(skip)]
    pub price_day: Option<f64>,
    #[garde(skip)]
    pub price_month: Option<f64>,
    #[garde(skip)]
    pub start_hour: Option<NaiveTime>,
    #[garde(skip)]
    pub end_hour: Option<NaiveTime>,
    #[garde(skip)]
    pub initial_date: DateTime<Utc>,
    #[garde(skip)]
    pub final_date: Option<DateTime<Utc>>,
}

impl From<CreateSpaceRequest> for CreateSpace {
    fn from(value: CreateSpaceRequest) -> Self {
        let CreateSpaceRequest {
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
        } = value;
        CreateSpace {
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
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSpaceResponse {
    pub space_id: SpaceId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesResponse {
    pub items: Vec<SpaceResponse>,
}

impl From<Vec<Space>> for SpacesResponse {
    fn from(value: Vec<Space>) -> Self {
        Self {
            items: value.into_iter().map(SpaceResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub space_id: SpaceId,
    pub space_name: String,
    pub owner_id: UserId,
    pub owner_name: String,
    pub shared: bool,
    pub width: f64,
    pub height: f64,
    pub area: f64,
    pub price_hour: Option<f64>,
    pub price_day: Option<f64>,
    pub price_month: Option<f64>,
    pub start_hour: Option<NaiveTime>,
    pub end_hour: Option<NaiveTime>,
    pub initial_date: DateTime<Utc>,
    pub final_date: Option<DateTime<Utc>>,
}

impl From<Space> for SpaceResponse {
    fn from(value: Space) -> Self {
        let area = value.area();
        let Space {
            space_id,
            space_name,
            owner,
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
            rentals: _,
        } = value;
        Self {
            space_id,
            space_name,
            owner_id: owner.owner_id,
            owner_name: owner.owner_name,
            shared,
            width,
            height,
            area,
            price_hour,
            price_day,
            price_month,
            start_hour,
            end_hour,
            initial_date,
            final_date,
        }
    }
}
