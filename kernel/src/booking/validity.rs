use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::model::rental::{RentalDraft, RentalRequest, RentalType};

use super::error::RuleViolation;

/// Structural validation of a raw rental draft. Pure function of its
/// inputs; checks run in a fixed order and short-circuit on the first
/// failure so responses stay deterministic.
pub fn check(draft: &RentalDraft, now: DateTime<Utc>) -> Result<RentalRequest, RuleViolation> {
    let (Some(initial_raw), Some(final_raw), Some(type_raw), Some(meters)) = (
        draft.initial_date.as_deref(),
        draft.final_date.as_deref(),
        draft.rental_type.as_deref(),
        draft.meters,
    ) else {
        return Err(RuleViolation::MissingAttributes);
    };

    let initial_date = parse_future_date(initial_raw, now).ok_or(RuleViolation::InitialDateInPast)?;
    let final_date = parse_future_date(final_raw, now).ok_or(RuleViolation::FinalDateInPast)?;

    if !meters.is_finite() || meters <= 0.0 {
        return Err(RuleViolation::MetersNotNumeric);
    }

    let rental_type =
        RentalType::from_str(type_raw).map_err(|_| RuleViolation::UnknownRentalType)?;

    if rental_type == RentalType::Month && (final_date - initial_date).num_days() < 30 {
        return Err(RuleViolation::ZeroMonthSpan);
    }

    Ok(RentalRequest {
        rental_type,
        initial_date,
        final_date,
        meters,
    })
}

// an unparseable date reports the same rule as a past one
fn parse_future_date(raw: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);
    (parsed >= now).then_some(parsed)
}
