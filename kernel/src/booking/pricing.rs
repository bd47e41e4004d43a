use chrono::Duration;

use crate::model::{
    rental::{RentalRequest, RentalType},
    role::Role,
    space::Space,
};

/// Commission applied before tax for callers that are neither subscribed
/// nor administrative.
pub const COMMISSION_RATE: f64 = 1.06;
/// Fixed tax multiplier, applied last.
pub const TAX_RATE: f64 = 1.21;

/// Monetary cost of a legal request. Inputs have already passed the
/// validity and availability checks, so this is plain arithmetic with no
/// failure modes.
pub fn cost(request: &RentalRequest, space: &Space, role: Role) -> f64 {
    let duration = request.final_date - request.initial_date;
    let (units, unit_price) = match request.rental_type {
        RentalType::Hour => (hours_ceil(duration), space.price_hour.unwrap_or_default()),
        RentalType::Day => (
            duration.num_days().max(1),
            space.price_day.unwrap_or_default(),
        ),
        RentalType::Month => (months(duration), space.price_month.unwrap_or_default()),
    };

    let mut price = units as f64 * unit_price;
    if space.shared {
        // partial-space pricing: a shared renter pays for their share of
        // the total area
        price *= request.meters / space.area();
    }
    price * commission(role) * TAX_RATE
}

pub fn commission(role: Role) -> f64 {
    match role {
        Role::Admin | Role::Subscribed => 1.0,
        Role::Verified | Role::User => COMMISSION_RATE,
    }
}

fn hours_ceil(duration: Duration) -> i64 {
    ((duration.num_seconds() + 3599) / 3600).max(1)
}

// Whole 30-day months over an exact integer day count; the minimum
// rentable unit is one month.
fn months(duration: Duration) -> i64 {
    ((duration.num_days() - 1) / 30).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        id::{SpaceId, UserId},
        user::SpaceOwner,
    };
    use chrono::{DateTime, Utc};

    fn date(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn space(shared: bool) -> Space {
        Space {
            space_id: SpaceId::new(),
            space_name: "basement".into(),
            owner: SpaceOwner {
                owner_id: UserId::new(),
                owner_name: "owner".into(),
            },
            shared,
            width: 10.0,
            height: 10.0,
            price_hour: Some(4.0),
            price_day: Some(56.0),
            price_month: Some(500.0),
            start_hour: None,
            end_hour: None,
            initial_date: date("2020-01-01T00:00:00Z"),
            final_date: None,
            rentals: Vec::new(),
        }
    }

    fn request(initial: &str, final_: &str, rental_type: RentalType, meters: f64) -> RentalRequest {
        RentalRequest {
            rental_type,
            initial_date: date(initial),
            final_date: date(final_),
            meters,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn one_day_at_the_listed_price_with_commission_and_tax() {
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-02-02T00:00:00Z",
            RentalType::Day,
            100.0,
        );
        assert_close(cost(&req, &space(false), Role::User), 56.0 * 1.06 * 1.21);
    }

    #[test]
    fn subscribed_and_admin_roles_pay_no_commission() {
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-02-02T00:00:00Z",
            RentalType::Day,
            100.0,
        );
        assert_close(cost(&req, &space(false), Role::Subscribed), 56.0 * 1.21);
        assert_close(cost(&req, &space(false), Role::Admin), 56.0 * 1.21);
        assert_close(
            cost(&req, &space(false), Role::Verified),
            56.0 * 1.06 * 1.21,
        );
    }

    #[test]
    fn partial_hours_round_up_with_a_one_hour_minimum() {
        // 90 minutes -> 2 hours
        let req = request(
            "2030-02-01T17:00:00Z",
            "2030-02-01T18:30:00Z",
            RentalType::Hour,
            100.0,
        );
        assert_close(
            cost(&req, &space(false), Role::User),
            2.0 * 4.0 * 1.06 * 1.21,
        );

        // 30 minutes -> still 1 hour
        let req = request(
            "2030-02-01T17:00:00Z",
            "2030-02-01T17:30:00Z",
            RentalType::Hour,
            100.0,
        );
        assert_close(cost(&req, &space(false), Role::User), 4.0 * 1.06 * 1.21);
    }

    #[test]
    fn day_count_truncates_with_a_one_day_minimum() {
        // 36 hours -> 1 day
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-02-02T12:00:00Z",
            RentalType::Day,
            100.0,
        );
        assert_close(cost(&req, &space(false), Role::User), 56.0 * 1.06 * 1.21);
    }

    #[test]
    fn months_use_exact_integer_day_counts() {
        // 30 days -> 1 month
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-03-03T00:00:00Z",
            RentalType::Month,
            100.0,
        );
        assert_close(cost(&req, &space(false), Role::User), 500.0 * 1.06 * 1.21);

        // 61 days -> 2 months
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-04-03T00:00:00Z",
            RentalType::Month,
            100.0,
        );
        assert_close(
            cost(&req, &space(false), Role::User),
            2.0 * 500.0 * 1.06 * 1.21,
        );
    }

    #[test]
    fn shared_spaces_scale_by_the_requested_share() {
        // a quarter of a 100 m2 space
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-02-02T00:00:00Z",
            RentalType::Day,
            25.0,
        );
        assert_close(
            cost(&req, &space(true), Role::User),
            56.0 * 0.25 * 1.06 * 1.21,
        );
    }
}
