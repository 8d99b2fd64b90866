//! Human-friendly, pedantically approximate elapsed-time formatting.
//!
//! Takes an elapsed span of time, picks the largest calendar-like unit
//! (year, month, day, hour, minute, second) that fits at least once, and
//! renders the scaled value with a pluralized unit label.
//!
//! Year and month lengths are astronomical averages (a mean tropical year
//! of 365.242189 days and one twelfth of it), not calendar lengths, which
//! keeps the arithmetic closed over plain seconds. Construction accepts
//! coarse human-scale units up to gigaannums, all reduced to a single day
//! count, capped at 999,999,999 days.
//!
//! ```
//! use yonks::{format_elapsed, Duration};
//!
//! let span = Duration::builder().seconds(86_400.0 * 40.0).build()?;
//! let scaled = span.format_scaled();
//!
//! assert_eq!("1.31 months", scaled.text);
//! assert_eq!(2_629_743.7608, scaled.scale);
//! assert_eq!("month", scaled.unit);
//!
//! let now = 1_449_750_600.0;
//! assert_eq!("1.00 day", format_elapsed(now - 86_400.0, Some(now))?);
//!
//! # Ok::<(), yonks::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod duration;
mod error;
mod format;
mod lexicon;
mod time;
mod unit;

pub use duration::{Duration, DurationBuilder};
pub use error::{Error, Result};
pub use format::{FormatOptions, ScaledFormat};
pub use lexicon::{Abbreviation, Lexicon, UnitLabels};
pub use time::{format_elapsed, unix_now};
pub use unit::{TimeUnit, DAYS_IN_MONTH, DAYS_IN_YEAR, SECS_IN_DAY, SECS_IN_MONTH, SECS_IN_YEAR};
