//! Timestamp generators for the historical order window.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;

/// Midnight UTC of the day `offset` days into the generation window.
///
/// The window covers `days_back` days ending at `now`; offset 0 is the
/// oldest day.
pub fn window_day(now: DateTime<Utc>, days_back: u32, offset: u32) -> DateTime<Utc> {
    let day = now - Duration::days(days_back as i64) + Duration::days(offset as i64);
    day.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// A timestamp within the given day: midnight plus uniform random
/// hours, minutes, and seconds.
pub fn time_in_day<R: Rng>(rng: &mut R, day: DateTime<Utc>) -> DateTime<Utc> {
    day + Duration::hours(rng.gen_range(0..=23))
        + Duration::minutes(rng.gen_range(0..=59))
        + Duration::seconds(rng.gen_range(0..=59))
}
