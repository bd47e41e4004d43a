use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::model::id::{RentalId, SpaceId, UserId};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RentalType {
    Hour,
    Day,
    Month,
}

/// A committed rental. Immutable once persisted.
#[derive(Debug, Clone)]
pub struct Rental {
    pub rental_id: RentalId,
    pub space_id: SpaceId,
    pub rented_by: UserId,
    pub rental_type: RentalType,
    pub initial_date: DateTime<Utc>,
    pub final_date: DateTime<Utc>,
    pub meters: f64,
    pub cost: f64,
    pub rented_at: DateTime<Utc>,
}

/// Raw proposal input. Fields stay optional so the structural checker
/// owns the missing-attribute rule instead of serde.
#[derive(Debug, Clone, Default)]
pub struct RentalDraft {
    pub initial_date: Option<String>,
    pub final_date: Option<String>,
    pub rental_type: Option<String>,
    pub meters: Option<f64>,
}

/// A draft that has passed structural validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalRequest {
    pub rental_type: RentalType,
    pub initial_date: DateTime<Utc>,
    pub final_date: DateTime<Utc>,
    pub meters: f64,
}
