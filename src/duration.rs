//! The duration value type and its extended constructor.

use crate::unit::{DAYS_IN_MONTH, DAYS_IN_YEAR};
use crate::Error;

/// Hard ceiling on the normalized day count.
///
/// 999,999,999 days is roughly 2.7 million years, so megaannums are the
/// largest extended unit that fits whole. Anything above is accepted by
/// the builder but fails at this check.
pub(crate) const MAX_DAYS: i64 = 999_999_999;

const MAX_DAYS_F: f64 = 999_999_999.0;
const MICROS_PER_SEC: i128 = 1_000_000;
const MICROS_PER_DAY: i128 = 86_400 * MICROS_PER_SEC;

/// An elapsed span of time.
///
/// Internally normalized to whole days plus a non-negative sub-day
/// remainder at microsecond resolution, so the sign of a span lives
/// entirely in the day count (`-1` second is `-1` day plus `86_399`
/// seconds). Values are immutable once built.
///
/// Construction goes through [`Duration::builder`], which accepts the
/// usual units plus coarse human-scale ones:
///
/// ```
/// use yonks::Duration;
///
/// let span = Duration::builder()
///     .decades(1.0)
///     .fortnights(2.0)
///     .build()?;
///
/// assert_eq!("10.08 years", span.format_scaled().text);
///
/// # Ok::<(), yonks::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    days: i64,
    secs: i32,   // [0, 86_399]
    micros: i32, // [0, 999_999]
}

impl Duration {
    /// Returns a builder with every unit set to zero.
    #[must_use]
    pub fn builder() -> DurationBuilder {
        DurationBuilder::default()
    }

    /// Total elapsed seconds as a float, negative for spans that reach
    /// into the future.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let days = self.days as f64;
        days * 86_400.0 + f64::from(self.secs) + f64::from(self.micros) / 1e6
    }

    /// Normalized whole-day component.
    #[must_use]
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Folds the seven native units into the canonical triple, rounding
    /// to microsecond resolution.
    pub(crate) fn normalize(
        days: f64,
        seconds: f64,
        microseconds: f64,
        milliseconds: f64,
        minutes: f64,
        hours: f64,
        weeks: f64,
    ) -> crate::Result<Self> {
        let total_days = days + 7.0 * weeks;
        let total_secs = seconds + 60.0 * minutes + 3_600.0 * hours;
        let total_micros = microseconds + 1_000.0 * milliseconds;

        // Split the day count off before going to microseconds; 1e9 days
        // is ~8.6e19 us, far past what f64 resolves.
        let whole_days = total_days.floor();
        let frac_micros = (total_days - whole_days) * 86_400.0 * 1e6;

        #[allow(clippy::cast_possible_truncation)]
        let micros = (frac_micros + total_secs * 1e6 + total_micros).round() as i128;

        #[allow(clippy::cast_possible_truncation)]
        let whole_days = whole_days as i128;

        let days = whole_days + micros.div_euclid(MICROS_PER_DAY);
        let rem = micros.rem_euclid(MICROS_PER_DAY);

        if days.unsigned_abs() > u128::from(MAX_DAYS.unsigned_abs()) {
            #[allow(clippy::cast_precision_loss)]
            let days = days as f64;
            return Err(Error::Overflow { days });
        }

        #[allow(clippy::cast_possible_truncation)]
        let normalized = Self {
            days: days as i64,
            secs: (rem / MICROS_PER_SEC) as i32,
            micros: (rem % MICROS_PER_SEC) as i32,
        };

        Ok(normalized)
    }
}

/// Builder for [`Duration`], accepting an open-ended set of human-scale
/// units on top of the native seven.
///
/// Every unit is a float defaulting to zero and may be negative; all of
/// them are reduced to a single day count before the value is
/// materialized. Unit lengths are approximate by design: a month is one
/// twelfth of a mean tropical year, a season a quarter of one, and so on
/// up through gigaannums.
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationBuilder {
    days: f64,
    seconds: f64,
    microseconds: f64,
    milliseconds: f64,
    minutes: f64,
    hours: f64,
    weeks: f64,
    fortnights: f64,
    months: f64,
    seasons: f64,
    years: f64,
    bienniums: f64,
    decades: f64,
    jubilees: f64,
    centuries: f64,
    millenniums: f64,
    ages: f64,
    megaannums: f64,
    epochs: f64,
    eras: f64,
    eons: f64,
    gigaannums: f64,
}

macro_rules! setter {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name(mut self, n: f64) -> Self {
            self.$name = n;
            self
        }
    };
}

impl DurationBuilder {
    setter!(days, "Sets the number of days.");
    setter!(seconds, "Sets the number of seconds.");
    setter!(microseconds, "Sets the number of microseconds.");
    setter!(milliseconds, "Sets the number of milliseconds.");
    setter!(minutes, "Sets the number of minutes.");
    setter!(hours, "Sets the number of hours.");
    setter!(weeks, "Sets the number of weeks (7 days).");
    setter!(fortnights, "Sets the number of fortnights (14 days).");
    setter!(months, "Sets the number of average months (1/12 year).");
    setter!(seasons, "Sets the number of seasons (1/4 year).");
    setter!(years, "Sets the number of mean tropical years.");
    setter!(bienniums, "Sets the number of bienniums (2 years).");
    setter!(decades, "Sets the number of decades (10 years).");
    setter!(jubilees, "Sets the number of jubilees (50 years).");
    setter!(centuries, "Sets the number of centuries (100 years).");
    setter!(millenniums, "Sets the number of millenniums (1,000 years).");
    setter!(ages, "Sets the number of ages (1,000,000 years).");
    setter!(megaannums, "Sets the number of megaannums (1,000,000 years).");
    setter!(epochs, "Sets the number of epochs (10,000,000 years).");
    setter!(eras, "Sets the number of eras (100,000,000 years).");
    setter!(eons, "Sets the number of eons (500,000,000 years).");
    setter!(gigaannums, "Sets the number of gigaannums (1,000,000,000 years).");

    /// Reduces the extended units to days and materializes the span.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the reduced day count exceeds
    /// 999,999,999 days, before any normalization happens. Large negative
    /// values pass this check and are caught by the normalization
    /// magnitude limit instead.
    pub fn build(self) -> crate::Result<Duration> {
        let totaled_days = self.days + self.as_extended_days();

        if totaled_days > MAX_DAYS_F {
            return Err(Error::Overflow {
                days: totaled_days,
            });
        }

        log::trace!("reduced extended units to {totaled_days} days");

        Duration::normalize(
            totaled_days,
            self.seconds,
            self.microseconds,
            self.milliseconds,
            self.minutes,
            self.hours,
            self.weeks,
        )
    }

    /// Like [`DurationBuilder::build`], but converts into any
    /// duration-compatible type on the way out.
    ///
    /// # Errors
    ///
    /// Same failure mode as [`DurationBuilder::build`].
    pub fn build_into<T: From<Duration>>(self) -> crate::Result<T> {
        self.build().map(T::from)
    }

    fn as_extended_days(self) -> f64 {
        let mut n_years = 0.0;
        n_years += 1_000_000_000.0 * self.gigaannums;
        n_years += 500_000_000.0 * self.eons;
        n_years += 100_000_000.0 * self.eras;
        n_years += 10_000_000.0 * self.epochs;
        n_years += 1_000_000.0 * self.megaannums;
        n_years += 1_000_000.0 * self.ages;
        n_years += 1_000.0 * self.millenniums;
        n_years += 100.0 * self.centuries;
        n_years += 50.0 * self.jubilees;
        n_years += 10.0 * self.decades;
        n_years += 2.0 * self.bienniums;
        n_years += self.years;
        n_years += 0.25 * self.seasons;

        let mut n_days = n_years * DAYS_IN_YEAR;
        n_days += DAYS_IN_MONTH * self.months;
        n_days += 14.0 * self.fortnights;
        n_days
    }
}
