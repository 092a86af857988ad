//! "Time since last refresh" label.

use chrono::{DateTime, Utc};

/// Human label for how long ago `then` was, relative to `now`.
///
/// Clock skew can put `then` in the future; that reads as "just now"
/// rather than a negative duration.
pub fn time_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    match seconds {
        0..=59 => "just now".to_string(),
        60..=3599 => plural(seconds / 60, "minute"),
        3600..=86399 => plural(seconds / 3600, "hour"),
        _ => plural(seconds / 86400, "day"),
    }
}

/// Label against the current wall clock.
pub fn time_since_now(then: DateTime<Utc>) -> String {
    time_since(then, Utc::now())
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
