/// Error type
#[derive(Debug)]
pub enum Error {
    /// The reduced day count cannot be represented.
    Overflow {
        /// The day count that was requested.
        days: f64,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { days } => {
                write!(f, "{days} days is not supported; try <= 999999999")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
