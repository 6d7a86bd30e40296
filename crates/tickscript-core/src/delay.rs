use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::ValidationError;

/// A delay given on the command line in (fractional) seconds.
///
/// Keeps the raw text so echoed output repeats exactly what the caller passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Delay {
    raw: String,
    duration: Duration,
}

impl Delay {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDelay {
            value: input.to_owned(),
        };
        let seconds = input.trim().parse::<f64>().map_err(|_| invalid())?;
        let duration = Duration::try_from_secs_f64(seconds).map_err(|_| invalid())?;
        Ok(Self {
            raw: input.to_owned(),
            duration,
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Display for Delay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
