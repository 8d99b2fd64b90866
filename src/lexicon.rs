//! Unit labels, abbreviation levels and pluralization.
//!
//! All user-facing label strings route through a [`Lexicon`] passed
//! explicitly in the format options, so swapping the vocabulary (or a
//! translation) never touches ambient global state.

use crate::TimeUnit;

/// How verbose the rendered unit label is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Abbreviation {
    /// Full words down to hours, "min"/"sec" below, with a trailing period
    /// on pluralized short forms ("2.50 mins.").
    #[default]
    Customary,

    /// Full singular word for every unit ("2.50 minutes").
    Full,

    /// 2-4 character abbreviation for every unit ("2.50 mins.").
    Short,

    /// Single designator, never pluralized ("2.50 m").
    Compact,
}

/// Display labels for one unit.
#[derive(Clone, Copy, Debug)]
pub struct UnitLabels {
    /// Full singular word.
    pub full: &'static str,

    /// 2-4 character abbreviation, without trailing period.
    pub short: &'static str,

    /// Single designator.
    pub compact: &'static str,

    /// Whether the customary rendering uses the short form.
    pub prefers_short: bool,
}

/// Label table for the six display units, ordered year down to second.
#[derive(Clone, Copy, Debug)]
pub struct Lexicon {
    labels: [UnitLabels; 6],
}

impl Lexicon {
    /// The built-in English vocabulary.
    pub const ENGLISH: Self = Self::new([
        UnitLabels {
            full: "year",
            short: "yr",
            compact: "y",
            prefers_short: false,
        },
        UnitLabels {
            full: "month",
            short: "mo",
            compact: "mo",
            prefers_short: false,
        },
        UnitLabels {
            full: "day",
            short: "day",
            compact: "d",
            prefers_short: false,
        },
        UnitLabels {
            full: "hour",
            short: "hr",
            compact: "h",
            prefers_short: false,
        },
        UnitLabels {
            full: "minute",
            short: "min",
            compact: "m",
            prefers_short: true,
        },
        UnitLabels {
            full: "second",
            short: "sec",
            compact: "s",
            prefers_short: true,
        },
    ]);

    /// Creates a lexicon from per-unit labels, ordered year down to second.
    #[must_use]
    pub const fn new(labels: [UnitLabels; 6]) -> Self {
        Self { labels }
    }

    // index() is always in 0..6
    #[allow(clippy::indexing_slicing)]
    fn labels(&self, unit: TimeUnit) -> &UnitLabels {
        &self.labels[unit.index()]
    }

    /// Resolves the display label for `unit` at the given abbreviation
    /// level and scaled count.
    ///
    /// Pluralizes in every mode except [`Abbreviation::Compact`]. A
    /// trailing period is appended when the mode warrants one (short
    /// forms) and pluralization actually changed the label.
    #[must_use]
    pub fn resolve(&self, unit: TimeUnit, abbreviation: Abbreviation, count: f64) -> String {
        let labels = self.labels(unit);

        let (base, wants_period) = match abbreviation {
            Abbreviation::Customary => {
                if labels.prefers_short {
                    (labels.short, true)
                } else {
                    (labels.full, false)
                }
            }
            Abbreviation::Full => (labels.full, false),
            Abbreviation::Short => (labels.short, true),
            Abbreviation::Compact => return labels.compact.into(),
        };

        let mut label = conditional_plural(count, base);

        if wants_period && label != base {
            label.push('.');
        }

        label
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::ENGLISH
    }
}

/// Returns `word` unchanged only when the magnitude of `count` is
/// exactly one, else a regular English plural. 1.31 months is "months".
#[allow(clippy::float_cmp)]
fn conditional_plural(count: f64, word: &str) -> String {
    if count.abs() == 1.0 {
        word.into()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_conditional_plural_singular_only_at_exactly_one() {
        assert_eq!("day", conditional_plural(1.0, "day"));
        assert_eq!("day", conditional_plural(-1.0, "day"));
        assert_eq!("days", conditional_plural(1.31, "day"));
        assert_eq!("days", conditional_plural(1.49, "day"));
        assert_eq!("days", conditional_plural(1.5, "day"));
        assert_eq!("days", conditional_plural(0.5, "day"));
        assert_eq!("days", conditional_plural(0.0, "day"));
        assert_eq!("days", conditional_plural(-2.0, "day"));
    }

    #[test_log::test]
    fn test_customary_labels() {
        let lex = Lexicon::ENGLISH;
        let abbr = Abbreviation::Customary;

        assert_eq!("hours", lex.resolve(TimeUnit::Hour, abbr, 12.0));
        assert_eq!("year", lex.resolve(TimeUnit::Year, abbr, 1.0));
        assert_eq!("months", lex.resolve(TimeUnit::Month, abbr, 1.31));
        assert_eq!("mins.", lex.resolve(TimeUnit::Minute, abbr, 2.5));
        assert_eq!("secs.", lex.resolve(TimeUnit::Second, abbr, 1.5));
        assert_eq!("secs.", lex.resolve(TimeUnit::Second, abbr, 1.2));

        // singular short forms are left bare
        assert_eq!("min", lex.resolve(TimeUnit::Minute, abbr, 1.0));
        assert_eq!("sec", lex.resolve(TimeUnit::Second, abbr, 1.0));
    }

    #[test_log::test]
    fn test_full_labels() {
        let lex = Lexicon::ENGLISH;
        let abbr = Abbreviation::Full;

        assert_eq!("seconds", lex.resolve(TimeUnit::Second, abbr, 1.5));
        assert_eq!("minute", lex.resolve(TimeUnit::Minute, abbr, 1.0));
        assert_eq!("months", lex.resolve(TimeUnit::Month, abbr, 3.0));
    }

    #[test_log::test]
    fn test_short_labels() {
        let lex = Lexicon::ENGLISH;
        let abbr = Abbreviation::Short;

        assert_eq!("hrs.", lex.resolve(TimeUnit::Hour, abbr, 12.0));
        assert_eq!("yr", lex.resolve(TimeUnit::Year, abbr, 1.0));
        assert_eq!("days.", lex.resolve(TimeUnit::Day, abbr, 40.0));
    }

    #[test_log::test]
    fn test_compact_labels_never_pluralize() {
        let lex = Lexicon::ENGLISH;
        let abbr = Abbreviation::Compact;

        assert_eq!("h", lex.resolve(TimeUnit::Hour, abbr, 12.0));
        assert_eq!("s", lex.resolve(TimeUnit::Second, abbr, 90.0));
        assert_eq!("mo", lex.resolve(TimeUnit::Month, abbr, 2.0));
    }
}
