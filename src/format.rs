//! Scaled rendering of durations.

use crate::lexicon::{Abbreviation, Lexicon};
use crate::{Duration, TimeUnit};

/// Options for [`Duration::format_scaled_with`].
#[derive(Clone, Copy, Debug)]
pub struct FormatOptions<'a> {
    /// Minimum width the numeric value is right-justified to. Zero means
    /// no padding.
    pub width: usize,

    /// Decimal digits the scaled value is rounded to.
    pub precision: usize,

    /// How verbose the unit label is.
    pub abbreviation: Abbreviation,

    /// Vocabulary the unit label is resolved against.
    pub lexicon: &'a Lexicon,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self {
            width: 0,
            precision: 2,
            abbreviation: Abbreviation::Customary,
            lexicon: &Lexicon::ENGLISH,
        }
    }
}

/// A duration rendered at its largest fitting unit.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledFormat {
    /// Scaled value plus resolved unit label, e.g. `"1.31 months"`.
    pub text: String,

    /// Seconds represented by one of the selected unit.
    pub scale: f64,

    /// Canonical English singular key of the selected unit, usable as a
    /// lookup key regardless of abbreviation mode or lexicon.
    pub unit: &'static str,
}

impl Duration {
    /// Renders the span at its largest fitting unit with default options
    /// (precision 2, no padding, customary labels).
    ///
    /// ```
    /// use yonks::Duration;
    ///
    /// let span = Duration::builder().seconds(43_200.0).build()?;
    /// let scaled = span.format_scaled();
    ///
    /// assert_eq!("12.00 hours", scaled.text);
    /// assert_eq!(3_600.0, scaled.scale);
    /// assert_eq!("hour", scaled.unit);
    ///
    /// # Ok::<(), yonks::Error>(())
    /// ```
    #[must_use]
    pub fn format_scaled(&self) -> ScaledFormat {
        self.format_scaled_with(&FormatOptions::default())
    }

    /// Renders the span at its largest fitting unit.
    ///
    /// The scaled value may be negative, and may dip below one unit for
    /// negative spans, since unit selection compares the signed total.
    #[must_use]
    pub fn format_scaled_with(&self, opts: &FormatOptions) -> ScaledFormat {
        let secs = self.total_seconds();
        let unit = TimeUnit::select(secs);
        let scale = unit.scale();
        let adjusted = secs / scale;

        let label = opts.lexicon.resolve(unit, opts.abbreviation, adjusted);
        let text = format!(
            "{adjusted:>width$.precision$} {label}",
            width = opts.width,
            precision = opts.precision,
        );

        ScaledFormat {
            text,
            scale,
            unit: unit.key(),
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_scaled().text)
    }
}
