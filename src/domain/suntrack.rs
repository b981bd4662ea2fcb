//! Sun-position helpers: where "now" sits inside today's daylight window,
//! plus clock-face formatting for sun event timestamps.
//!
//! All math happens on the local time-of-day in the supplied zone; the
//! date component is discarded. That makes the progress value a same-day
//! ratio rather than an absolute elapsed duration, which is what the
//! daylight arc consumes. Sunset before sunrise (a window crossing
//! midnight) is outside the model and collapses to zero.

use chrono::{NaiveTime, TimeZone, Utc};

/// Local time-of-day for an instant given in epoch milliseconds.
fn time_of_day<Tz: TimeZone>(epoch_millis: i64, tz: &Tz) -> Option<NaiveTime> {
    tz.timestamp_millis_opt(epoch_millis)
        .single()
        .map(|dt| dt.time())
}

/// Fraction of the sunrise-to-sunset window that has elapsed at `now`.
///
/// `sunrise_secs` and `sunset_secs` are epoch seconds, `now_millis` epoch
/// milliseconds. The result is unclamped: negative before sunrise, above
/// one after sunset. A zero or negative window yields `0.0`.
pub fn daylight_progress<Tz: TimeZone>(
    sunrise_secs: i64,
    now_millis: i64,
    sunset_secs: i64,
    tz: &Tz,
) -> f64 {
    let (Some(start), Some(now), Some(end)) = (
        time_of_day(sunrise_secs * 1000, tz),
        time_of_day(now_millis, tz),
        time_of_day(sunset_secs * 1000, tz),
    ) else {
        return 0.0;
    };

    let total = (end - start).num_seconds();
    if total <= 0 {
        return 0.0;
    }
    let elapsed = (now - start).num_seconds();

    elapsed as f64 / total as f64
}

/// [`daylight_progress`] clamped to `[0, 1]` for indicator positioning.
pub fn daylight_progress_clamped<Tz: TimeZone>(
    sunrise_secs: i64,
    now_millis: i64,
    sunset_secs: i64,
    tz: &Tz,
) -> f64 {
    daylight_progress(sunrise_secs, now_millis, sunset_secs, tz).clamp(0.0, 1.0)
}

/// Epoch seconds rendered as a local `HH:mm` clock time.
pub fn clock_time<Tz: TimeZone>(epoch_secs: i64, tz: &Tz) -> String {
    time_of_day(epoch_secs * 1000, tz)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Epoch seconds rendered as a local `HH` hour label.
pub fn clock_hour<Tz: TimeZone>(epoch_secs: i64, tz: &Tz) -> String {
    time_of_day(epoch_secs * 1000, tz)
        .map(|t| t.format("%H").to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Current instant in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
