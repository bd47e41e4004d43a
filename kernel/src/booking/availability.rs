use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};

use crate::model::{
    id::UserId,
    rental::{Rental, RentalRequest, RentalType},
    space::Space,
};

use super::error::RuleViolation;

/// Temporal and spatial legality of a validated request against a space
/// and its active rentals. Pure; checks run cheapest-first with the
/// overlap scan last, and the first failing rule short-circuits.
pub fn check(
    request: &RentalRequest,
    renter_id: UserId,
    space: &Space,
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    check_type_support(request.rental_type, space)?;

    if request.final_date <= request.initial_date {
        return Err(RuleViolation::FinalBeforeInitial);
    }

    if !within_space_window(request.initial_date, space) {
        return Err(RuleViolation::InitialDateOutOfWindow);
    }
    if !within_space_window(request.final_date, space) {
        return Err(RuleViolation::FinalDateOutOfWindow);
    }

    if request.initial_date < now + Duration::hours(24) {
        return Err(RuleViolation::InitialDateTooSoon);
    }

    check_capacity(
        request.initial_date,
        request.final_date,
        request.meters,
        space,
        now,
    )?;

    if request.meters > space.area() {
        return Err(RuleViolation::MetersExceedArea);
    }
    // an exclusive rental always consumes the whole space
    if !space.shared && request.meters != space.area() {
        return Err(RuleViolation::MetersNotExactArea);
    }

    if request.rental_type == RentalType::Hour {
        check_hour_window(request, space)?;
    }

    check_renter_unique(renter_id, space, now)
}

/// Overlap test for exclusive spaces, meters accumulation for shared
/// ones. Only rentals that have not yet expired at `now` count. This is
/// also the commit-time re-check, re-run by the rental repository inside
/// its serializable transaction.
pub fn check_capacity(
    initial_date: DateTime<Utc>,
    final_date: DateTime<Utc>,
    meters: f64,
    space: &Space,
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    if space.shared {
        let occupied: f64 = space
            .active_rentals(now)
            .filter(|r| intersects(initial_date, final_date, r))
            .map(|r| r.meters)
            .sum();
        if occupied + meters > space.area() {
            return Err(RuleViolation::CapacityExceeded);
        }
    } else if space
        .active_rentals(now)
        .any(|r| intersects(initial_date, final_date, r))
    {
        return Err(RuleViolation::CapacityExceeded);
    }
    Ok(())
}

/// A renter holds at most one active rental per space.
pub fn check_renter_unique(
    renter_id: UserId,
    space: &Space,
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    if space.active_rentals(now).any(|r| r.rented_by == renter_id) {
        return Err(RuleViolation::DuplicateActiveRental);
    }
    Ok(())
}

/// The subset of rules whose truth can drift between propose and
/// confirm; everything else was settled when the proposal was staged.
pub fn recheck_commit(
    initial_date: DateTime<Utc>,
    final_date: DateTime<Utc>,
    meters: f64,
    renter_id: UserId,
    space: &Space,
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    check_capacity(initial_date, final_date, meters, space, now)?;
    check_renter_unique(renter_id, space, now)
}

// Half-open interval intersection. One inequality pair covers all four
// relations: contains, contained-by, left overlap and right overlap.
fn intersects(initial_date: DateTime<Utc>, final_date: DateTime<Utc>, rental: &Rental) -> bool {
    initial_date < rental.final_date && final_date > rental.initial_date
}

fn within_space_window(date: DateTime<Utc>, space: &Space) -> bool {
    date >= space.initial_date && !space.final_date.is_some_and(|end| date > end)
}

fn check_type_support(rental_type: RentalType, space: &Space) -> Result<(), RuleViolation> {
    match rental_type {
        RentalType::Hour
            if space.price_hour.is_none()
                || space.start_hour.is_none()
                || space.end_hour.is_none() =>
        {
            Err(RuleViolation::HourlyRentalUnsupported)
        }
        RentalType::Day if space.price_day.is_none() => Err(RuleViolation::DailyRentalUnsupported),
        RentalType::Month if space.price_month.is_none() => {
            Err(RuleViolation::MonthlyRentalUnsupported)
        }
        _ => Ok(()),
    }
}

// Hour-of-day windowing compares hour and minute components only; the
// date part must never participate, otherwise day rollovers leak in.
fn check_hour_window(request: &RentalRequest, space: &Space) -> Result<(), RuleViolation> {
    let (Some(start), Some(end)) = (space.start_hour, space.end_hour) else {
        return Err(RuleViolation::HourlyRentalUnsupported);
    };

    let initial = hour_and_minute_of(request.initial_date);
    let final_ = hour_and_minute_of(request.final_date);
    if initial < hour_and_minute(start) || initial > hour_and_minute(end) {
        return Err(RuleViolation::InitialHourOutOfWindow);
    }
    if final_ < hour_and_minute(start) || final_ > hour_and_minute(end) {
        return Err(RuleViolation::FinalHourOutOfWindow);
    }

    if request.initial_date.date_naive() == request.final_date.date_naive()
        && request.initial_date.hour() == request.final_date.hour()
    {
        return Err(RuleViolation::ZeroHourSpan);
    }
    Ok(())
}

fn hour_and_minute_of(date: DateTime<Utc>) -> (u32, u32) {
    (date.hour(), date.minute())
}

fn hour_and_minute(time: NaiveTime) -> (u32, u32) {
    (time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        id::{RentalId, SpaceId},
        user::SpaceOwner,
    };

    fn date(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn now() -> DateTime<Utc> {
        date("2030-01-01T00:00:00Z")
    }

    fn space(shared: bool, width: f64, height: f64) -> Space {
        Space {
            space_id: SpaceId::new(),
            space_name: "garage".into(),
            owner: SpaceOwner {
                owner_id: UserId::new(),
                owner_name: "owner".into(),
            },
            shared,
            width,
            height,
            price_hour: None,
            price_day: Some(56.0),
            price_month: Some(500.0),
            start_hour: None,
            end_hour: None,
            initial_date: date("2020-01-01T00:00:00Z"),
            final_date: None,
            rentals: Vec::new(),
        }
    }

    fn rental(space_id: SpaceId, initial: &str, final_: &str, meters: f64) -> Rental {
        Rental {
            rental_id: RentalId::new(),
            space_id,
            rented_by: UserId::new(),
            rental_type: RentalType::Day,
            initial_date: date(initial),
            final_date: date(final_),
            meters,
            cost: 100.0,
            rented_at: date("2029-01-01T00:00:00Z"),
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

    #[test]
    fn type_requirements_are_checked_first() {
        let mut sp = space(true, 10.0, 10.0);
        sp.price_day = None;
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-02-05T00:00:00Z",
            RentalType::Day,
            10.0,
        );
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::DailyRentalUnsupported)
        );

        let req = request(
            "2030-02-01T17:00:00Z",
            "2030-02-01T19:00:00Z",
            RentalType::Hour,
            100.0,
        );
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::HourlyRentalUnsupported)
        );
    }

    #[test]
    fn final_date_must_come_after_initial_date() {
        let sp = space(true, 10.0, 10.0);
        let req = request(
            "2030-02-05T00:00:00Z",
            "2030-02-01T00:00:00Z",
            RentalType::Day,
            10.0,
        );
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::FinalBeforeInitial)
        );
    }

    #[test]
    fn dates_outside_the_space_window_are_rejected_separately() {
        let mut sp = space(true, 10.0, 10.0);
        sp.initial_date = date("2030-03-01T00:00:00Z");
        sp.final_date = Some(date("2030-06-01T00:00:00Z"));

        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-04-01T00:00:00Z",
            RentalType::Day,
            10.0,
        );
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::InitialDateOutOfWindow)
        );

        let req = request(
            "2030-03-10T00:00:00Z",
            "2030-07-01T00:00:00Z",
            RentalType::Day,
            10.0,
        );
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::FinalDateOutOfWindow)
        );
    }

    #[test]
    fn initial_date_must_leave_a_full_day_of_notice() {
        let sp = space(true, 10.0, 10.0);
        let req = request(
            "2030-01-01T12:00:00Z",
            "2030-02-01T00:00:00Z",
            RentalType::Day,
            10.0,
        );
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::InitialDateTooSoon)
        );
    }

    #[test]
    fn exclusive_space_rejects_any_intersection() {
        let mut sp = space(false, 10.0, 10.0);
        sp.rentals = vec![rental(
            sp.space_id,
            "2030-02-10T00:00:00Z",
            "2030-02-20T00:00:00Z",
            100.0,
        )];

        // left overlap, right overlap, contained, containing
        for (initial, final_) in [
            ("2030-02-05T00:00:00Z", "2030-02-12T00:00:00Z"),
            ("2030-02-18T00:00:00Z", "2030-02-25T00:00:00Z"),
            ("2030-02-12T00:00:00Z", "2030-02-14T00:00:00Z"),
            ("2030-02-01T00:00:00Z", "2030-02-28T00:00:00Z"),
        ] {
            let req = request(initial, final_, RentalType::Day, 100.0);
            assert_eq!(
                check(&req, UserId::new(), &sp, now()),
                Err(RuleViolation::CapacityExceeded),
                "{initial}..{final_} should intersect"
            );
        }

        // touching intervals do not intersect under half-open semantics
        let req = request(
            "2030-02-20T00:00:00Z",
            "2030-02-25T00:00:00Z",
            RentalType::Day,
            100.0,
        );
        assert!(check(&req, UserId::new(), &sp, now()).is_ok());
    }

    #[test]
    fn expired_rentals_do_not_block_an_exclusive_space() {
        let mut sp = space(false, 10.0, 10.0);
        sp.rentals = vec![rental(
            sp.space_id,
            "2029-01-01T00:00:00Z",
            "2029-06-01T00:00:00Z",
            100.0,
        )];
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-02-05T00:00:00Z",
            RentalType::Day,
            100.0,
        );
        assert!(check(&req, UserId::new(), &sp, now()).is_ok());
    }

    #[test]
    fn shared_space_accumulates_overlapping_meters() {
        // existing 100 m2 over 2023-2030 plus 100 m2 over 2031-2040 on a
        // 300 m2 space; a 300 m2 request across 2024-2029 overlaps the
        // first rental only and busts the capacity
        let mut sp = space(true, 30.0, 10.0);
        sp.rentals = vec![
            rental(
                sp.space_id,
                "2023-01-01T00:00:00Z",
                "2030-01-01T00:00:00Z",
                100.0,
            ),
            rental(
                sp.space_id,
                "2031-01-01T00:00:00Z",
                "2040-01-01T00:00:00Z",
                100.0,
            ),
        ];
        let early_now = date("2023-06-01T00:00:00Z");
        let req = request(
            "2024-01-01T00:00:00Z",
            "2029-01-01T00:00:00Z",
            RentalType::Day,
            300.0,
        );
        let err = check_capacity(req.initial_date, req.final_date, req.meters, &sp, early_now);
        assert_eq!(err, Err(RuleViolation::CapacityExceeded));
        assert_eq!(
            err.unwrap_err().to_string(),
            "Space not available or space capacity exceeded"
        );
    }

    #[test]
    fn tiny_request_with_no_date_overlap_is_accepted_on_a_shared_space() {
        let mut sp = space(true, 30.0, 10.0);
        sp.rentals = vec![rental(
            sp.space_id,
            "2125-01-01T00:00:00Z",
            "2130-01-01T00:00:00Z",
            200.0,
        )];
        let req = request(
            "2900-01-01T00:00:00Z",
            "2900-03-02T00:00:00Z",
            RentalType::Month,
            0.00000000000000000001,
        );
        assert!(check(&req, UserId::new(), &sp, now()).is_ok());
    }

    #[test]
    fn overlap_is_symmetric() {
        let sp = space(true, 30.0, 10.0);
        let a = rental(
            sp.space_id,
            "2030-02-01T00:00:00Z",
            "2030-02-10T00:00:00Z",
            1.0,
        );
        let b = rental(
            sp.space_id,
            "2030-02-05T00:00:00Z",
            "2030-02-15T00:00:00Z",
            1.0,
        );
        assert!(intersects(a.initial_date, a.final_date, &b));
        assert!(intersects(b.initial_date, b.final_date, &a));
    }

    #[test]
    fn oversized_request_is_rejected_even_without_overlap() {
        let sp = space(true, 10.0, 10.0);
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-02-05T00:00:00Z",
            RentalType::Day,
            250.0,
        );
        // with no overlapping rentals the capacity sum already busts
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::CapacityExceeded)
        );
    }

    #[test]
    fn exclusive_space_requires_the_exact_area() {
        let sp = space(false, 10.0, 10.0);
        let req = request(
            "2030-02-01T00:00:00Z",
            "2030-02-05T00:00:00Z",
            RentalType::Day,
            60.0,
        );
        let err = check(&req, UserId::new(), &sp, now());
        assert_eq!(err, Err(RuleViolation::MetersNotExactArea));
        assert_eq!(
            err.unwrap_err().to_string(),
            "Meters must be equal to space meters"
        );
    }

    fn hourly_space() -> Space {
        let mut sp = space(false, 10.0, 10.0);
        sp.price_hour = Some(4.0);
        sp.start_hour = Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        sp.end_hour = Some(NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        sp
    }

    #[test]
    fn hour_rental_must_fit_the_space_hours() {
        let sp = hourly_space();
        let req = request(
            "2030-02-01T18:00:00Z",
            "2030-02-01T22:00:00Z",
            RentalType::Hour,
            100.0,
        );
        let err = check(&req, UserId::new(), &sp, now());
        assert_eq!(err, Err(RuleViolation::FinalHourOutOfWindow));
        assert_eq!(
            err.unwrap_err().to_string(),
            "Final hour must be between space hours"
        );

        let req = request(
            "2030-02-01T10:00:00Z",
            "2030-02-01T18:00:00Z",
            RentalType::Hour,
            100.0,
        );
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::InitialHourOutOfWindow)
        );
    }

    #[test]
    fn hour_window_ignores_the_date_component() {
        let sp = hourly_space();
        // spans two days but both ends sit inside 17:00-19:00
        let req = request(
            "2030-02-01T18:00:00Z",
            "2030-02-03T18:30:00Z",
            RentalType::Hour,
            100.0,
        );
        assert!(check(&req, UserId::new(), &sp, now()).is_ok());
    }

    #[test]
    fn same_day_zero_hour_span_is_rejected() {
        let sp = hourly_space();
        let req = request(
            "2030-02-01T17:10:00Z",
            "2030-02-01T17:50:00Z",
            RentalType::Hour,
            100.0,
        );
        assert_eq!(
            check(&req, UserId::new(), &sp, now()),
            Err(RuleViolation::ZeroHourSpan)
        );
    }

    #[test]
    fn renter_cannot_hold_two_active_rentals_on_one_space() {
        let renter = UserId::new();
        let mut sp = space(true, 30.0, 10.0);
        let mut existing = rental(
            sp.space_id,
            "2030-03-01T00:00:00Z",
            "2030-04-01T00:00:00Z",
            10.0,
        );
        existing.rented_by = renter;
        sp.rentals = vec![existing];

        // disjoint dates, still refused for the same renter
        let req = request(
            "2030-05-01T00:00:00Z",
            "2030-05-10T00:00:00Z",
            RentalType::Day,
            10.0,
        );
        assert_eq!(
            check(&req, renter, &sp, now()),
            Err(RuleViolation::DuplicateActiveRental)
        );
        assert!(check(&req, UserId::new(), &sp, now()).is_ok());
    }
}
