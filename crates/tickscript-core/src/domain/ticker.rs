use std::fmt::{Display, Formatter};

use crate::ValidationError;

const MAX_TICKER_LEN: usize = 15;

/// A ticker exactly as the caller spelled it, minus surrounding whitespace.
///
/// The text is bound verbatim into the store query, so `aapl` only matches rows stored
/// as `aapl`. Exchange suffixes (`7203.T`, `BRK-B`) and index carets (`^GSPC`) are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let text = input.trim();
        let Some(first) = text.chars().next() else {
            return Err(ValidationError::EmptyTicker);
        };

        let len = text.chars().count();
        if len > MAX_TICKER_LEN {
            return Err(ValidationError::TickerTooLong {
                len,
                max: MAX_TICKER_LEN,
            });
        }

        if !(first.is_ascii_alphanumeric() || first == '^') {
            return Err(ValidationError::TickerInvalidStart { ch: first });
        }

        if let Some((index, ch)) = text
            .chars()
            .enumerate()
            .skip(1)
            .find(|&(_, ch)| !(ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-')))
        {
            return Err(ValidationError::TickerInvalidChar { ch, index });
        }

        Ok(Self(text.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
