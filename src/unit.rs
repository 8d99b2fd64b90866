//! Display units and the scale table used to pick them.
//!
//! The year and month lengths are astronomical averages, not calendar
//! lengths, so a "month" here is always 30.436849... days. That keeps the
//! math closed over plain seconds at the cost of never matching a wall
//! calendar exactly.

/// Days in a mean tropical year (Laskar's expression, J2000.0).
pub const DAYS_IN_YEAR: f64 = 365.242189;

/// Seconds in a mean solar day.
pub const SECS_IN_DAY: f64 = 86_400.0;

/// Seconds in a mean tropical year (31,556,925.1296).
pub const SECS_IN_YEAR: f64 = DAYS_IN_YEAR * SECS_IN_DAY;

/// Days in an average month, one twelfth of a tropical year.
pub const DAYS_IN_MONTH: f64 = DAYS_IN_YEAR / 12.0;

/// Seconds in an average month (2,629,743.7608).
pub const SECS_IN_MONTH: f64 = SECS_IN_YEAR / 12.0;

const SECS_IN_HOUR: f64 = 3_600.0;
const SECS_IN_MINUTE: f64 = 60.0;

/// A display unit for rendering an elapsed span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    /// Mean tropical year.
    Year,

    /// One twelfth of a tropical year.
    Month,

    /// Mean solar day.
    Day,

    /// 3,600 seconds.
    Hour,

    /// 60 seconds.
    Minute,

    /// SI second.
    Second,
}

impl TimeUnit {
    const DESCENDING: [Self; 5] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
    ];

    /// Picks the largest unit that fits into `secs` at least once.
    ///
    /// Thresholds are closed at the lower bound: exactly one year's worth
    /// of seconds selects `Year`, not `Month`. Comparison is on the signed
    /// value, so any negative span falls through to `Second`.
    pub(crate) fn select(secs: f64) -> Self {
        Self::DESCENDING
            .into_iter()
            .find(|unit| secs >= unit.scale())
            .unwrap_or(Self::Second)
    }

    /// Seconds represented by one of this unit.
    #[must_use]
    pub fn scale(self) -> f64 {
        match self {
            Self::Year => SECS_IN_YEAR,
            Self::Month => SECS_IN_MONTH,
            Self::Day => SECS_IN_DAY,
            Self::Hour => SECS_IN_HOUR,
            Self::Minute => SECS_IN_MINUTE,
            Self::Second => 1.0,
        }
    }

    /// Canonical English singular key, stable across abbreviation modes
    /// and lexicons, so it can be used for lookups.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "min",
            Self::Second => "sec",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
            Self::Minute => 4,
            Self::Second => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_select_thresholds_are_closed() {
        assert_eq!(TimeUnit::Year, TimeUnit::select(SECS_IN_YEAR));
        assert_eq!(TimeUnit::Month, TimeUnit::select(SECS_IN_MONTH));
        assert_eq!(TimeUnit::Day, TimeUnit::select(SECS_IN_DAY));
        assert_eq!(TimeUnit::Hour, TimeUnit::select(3_600.0));
        assert_eq!(TimeUnit::Minute, TimeUnit::select(60.0));
    }

    #[test_log::test]
    fn test_select_just_below_threshold() {
        assert_eq!(TimeUnit::Month, TimeUnit::select(SECS_IN_YEAR - 1.0));
        assert_eq!(TimeUnit::Day, TimeUnit::select(SECS_IN_MONTH - 1.0));
        assert_eq!(TimeUnit::Hour, TimeUnit::select(86_399.0));
        assert_eq!(TimeUnit::Minute, TimeUnit::select(3_599.0));
        assert_eq!(TimeUnit::Second, TimeUnit::select(59.999));
    }

    #[test_log::test]
    fn test_select_sub_second_and_zero() {
        assert_eq!(TimeUnit::Second, TimeUnit::select(1.0));
        assert_eq!(TimeUnit::Second, TimeUnit::select(0.5));
        assert_eq!(TimeUnit::Second, TimeUnit::select(0.0));
    }

    #[test_log::test]
    fn test_select_negative_is_signed_not_magnitude() {
        // -2 days would be "day"-sized by magnitude, but comparison is
        // numeric, so every negative span renders in seconds.
        assert_eq!(TimeUnit::Second, TimeUnit::select(-2.0 * SECS_IN_DAY));
        assert_eq!(TimeUnit::Second, TimeUnit::select(-0.5));
        assert_eq!(TimeUnit::Second, TimeUnit::select(-2.0 * SECS_IN_YEAR));
    }

    #[test_log::test]
    fn test_scale_constants() {
        assert_eq!(31_556_925.1296, TimeUnit::Year.scale());
        assert_eq!(2_629_743.7608, TimeUnit::Month.scale());
        assert_eq!(86_400.0, TimeUnit::Day.scale());
        assert_eq!(1.0, TimeUnit::Second.scale());
    }
}
