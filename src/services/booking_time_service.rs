use crate::database::Database;
use crate::error::{BookingError, BookingResult};
use crate::models::{DayType, TimeRule, ValidationOutcome};
use crate::services::HolidayService;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use tracing::debug;

/// The morning approval window is a fixed policy constant, independent
/// of the admin-configurable rule table.
const APPROVAL_WINDOW_START: &str = "09:00";
const APPROVAL_WINDOW_END: &str = "12:00";

/// Classifies dates, evaluates candidate times against the rule table,
/// generates bookable slots and applies the approval policy.
#[derive(Clone)]
pub struct BookingTimeService {
    db: Database,
    holiday_service: HolidayService,
}

impl BookingTimeService {
    pub fn new(db: Database, holiday_service: HolidayService) -> Self {
        Self {
            db,
            holiday_service,
        }
    }

    /// Map a calendar date to its operational day type.
    ///
    /// Holiday beats weekend: a holiday on a Saturday uses the holiday
    /// rule set, not the weekend one.
    pub async fn classify_date(&self, date: &str) -> BookingResult<DayType> {
        let parsed = parse_date(date)?;

        if self.holiday_service.is_holiday(date).await? {
            return Ok(DayType::Holiday);
        }

        match parsed.weekday() {
            Weekday::Sat | Weekday::Sun => Ok(DayType::Weekend),
            _ => Ok(DayType::Weekday),
        }
    }

    /// The ordered rules applicable to a specific date.
    pub async fn rules_for_date(&self, date: &str) -> BookingResult<(DayType, Vec<TimeRule>)> {
        let day_type = self.classify_date(date).await?;
        let rules = self.db.rules_for_day_type(day_type).await?;
        Ok((day_type, rules))
    }

    /// All bookable time-of-day values for a date, in rule order.
    ///
    /// Overlapping rules may produce duplicate slot values; callers
    /// wanting a set must de-duplicate themselves.
    pub async fn available_slots(&self, date: &str) -> BookingResult<(DayType, Vec<String>)> {
        let (day_type, rules) = self.rules_for_date(date).await?;
        let settings = self.db.load_booking_settings().await?;

        let slots = generate_slots(&rules, settings.granularity_minutes);
        debug!(date, %day_type, count = slots.len(), "generated booking slots");

        Ok((day_type, slots))
    }

    /// Whether a booking at this time needs administrative approval.
    pub async fn requires_approval(&self, time: &str) -> BookingResult<bool> {
        let settings = self.db.load_booking_settings().await?;
        if !settings.morning_walk_requires_approval {
            return Ok(false);
        }

        let normalized = parse_time(time)?;
        Ok(in_approval_window(&normalized))
    }

    /// Validate a candidate (date, time) pair: parse, classify, check
    /// it against the applicable windows and evaluate the approval
    /// policy. One synchronous answer, no retries; the first failing
    /// stage short-circuits with its specific error.
    pub async fn validate_candidate(
        &self,
        date: &str,
        time: &str,
    ) -> BookingResult<ValidationOutcome> {
        parse_date(date)?;
        let normalized = parse_time(time)?;

        let day_type = self.classify_date(date).await?;
        let rules = self.db.rules_for_day_type(day_type).await?;

        evaluate_candidate(&rules, &normalized)?;

        let requires_approval = self.requires_approval(&normalized).await?;
        Ok(ValidationOutcome { requires_approval })
    }
}

pub fn parse_date(date: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| BookingError::InvalidDateFormat)
}

/// Parse and normalize an HH:MM time-of-day string. The zero-padded
/// form makes plain string comparison against rule bounds sound.
pub fn parse_time(time: &str) -> BookingResult<String> {
    let parsed =
        NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| BookingError::InvalidTimeFormat)?;
    Ok(parsed.format("%H:%M").to_string())
}

fn in_approval_window(time: &str) -> bool {
    time >= APPROVAL_WINDOW_START && time < APPROVAL_WINDOW_END
}

/// Evaluate a normalized candidate time against a day type's rules.
///
/// A rule covers the candidate when `start <= time < end` (half-open:
/// a slot at a boundary belongs to the window that starts there). A
/// covering blocked rule rejects even when an allowed rule also covers
/// the candidate -- blocked wins, so misconfigured overlaps fail safe.
pub fn evaluate_candidate(rules: &[TimeRule], time: &str) -> BookingResult<()> {
    let mut covered_by_allowed = false;

    for rule in rules {
        let covers = rule.start_time.as_str() <= time && time < rule.end_time.as_str();
        if !covers {
            continue;
        }

        if rule.is_blocked {
            return Err(BookingError::InBlockedWindow {
                rule: rule.name.clone(),
                start: rule.start_time.clone(),
                end: rule.end_time.clone(),
            });
        }
        covered_by_allowed = true;
    }

    if covered_by_allowed {
        Ok(())
    } else {
        Err(BookingError::OutsideAllowedWindow)
    }
}

/// Enumerate slots by walking every non-blocked rule from start to end
/// in granularity steps, stopping before the exclusive end boundary.
/// Pure function of the rules and granularity: finite, deterministic,
/// restartable. Rules with unparseable bounds contribute nothing.
pub fn generate_slots(rules: &[TimeRule], granularity_minutes: u32) -> Vec<String> {
    let step = chrono::Duration::minutes(i64::from(granularity_minutes.max(1)));
    let mut slots = Vec::new();

    for rule in rules {
        if rule.is_blocked {
            continue;
        }

        let (Ok(start), Ok(end)) = (
            NaiveTime::parse_from_str(&rule.start_time, "%H:%M"),
            NaiveTime::parse_from_str(&rule.end_time, "%H:%M"),
        ) else {
            continue;
        };

        let mut current = start;
        while current < end {
            slots.push(current.format("%H:%M").to_string());
            let next = current + step;
            // NaiveTime arithmetic wraps at midnight; a wrap means the
            // step ran off the end of the day.
            if next <= current {
                break;
            }
            current = next;
        }
    }

    slots
}
