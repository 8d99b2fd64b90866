//! Wall clock access and the elapsed-time convenience formatter.

use crate::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time as fractional seconds since the
/// Unix epoch.
#[must_use]
pub fn unix_now() -> f64 {
    let start = SystemTime::now();
    let since_the_epoch = start
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards");

    since_the_epoch.as_secs_f64()
}

/// Formats the time elapsed between two epoch timestamps at the largest
/// fitting unit, e.g. `"1.00 day"`.
///
/// `now` falls back to the current wall-clock time. The result is
/// negative when `then` lies in the future.
///
/// ```
/// use yonks::format_elapsed;
///
/// let now = 1_449_750_600.0;
/// let formatted = format_elapsed(now - 86_400.0, Some(now))?;
/// assert_eq!("1.00 day", formatted);
///
/// # Ok::<(), yonks::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::Overflow`] if the elapsed span exceeds the
/// representable day range.
pub fn format_elapsed(then: f64, now: Option<f64>) -> crate::Result<String> {
    let now = now.unwrap_or_else(unix_now);
    let span = Duration::builder().seconds(now - then).build()?;
    Ok(span.format_scaled().text)
}
