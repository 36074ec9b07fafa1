// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type returned when a string cannot be read as an [`Instant`](crate::Instant).

use thiserror::Error;

/// The input of [`Instant::from_iso_string`](crate::Instant::from_iso_string)
/// is not a recognisable ISO-8601 date or date-time.
///
/// This is the only failure mode of the crate: every numeric input is
/// accepted and normalised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ISO-8601 datetime: {input:?}")]
pub struct ParseError {
    input: String,
}

impl ParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_the_input() {
        let err = ParseError::new("not-a-date");
        assert_eq!(err.to_string(), r#"invalid ISO-8601 datetime: "not-a-date""#);
        assert_eq!(err.input(), "not-a-date");
    }
}
