// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Strongly-typed zone handle.
//!
//! This module provides a `Tz` type for callers that want an up-front
//! validity check instead of the silent fallback of [`crate::posix_tz`].
//! Parsing fails for names not in the table; a parsed `Tz` resolves its rule
//! string infallibly.

use std::fmt;
use std::str::FromStr;

use crate::mapping::{FALLBACK_POSIX_TZ, TZ_VARIANTS};

/// A validated timezone handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tz {
    /// UTC (no offset, no DST)
    Utc,
    /// A named IANA timezone
    Named(TzInner),
}

/// Inner timezone data (index into TZ_VARIANTS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TzInner {
    /// Index into TZ_VARIANTS array
    index: u16,
}

impl Tz {
    /// Get the IANA name of this timezone.
    pub fn name(&self) -> &'static str {
        match self {
            Tz::Utc => "UTC",
            Tz::Named(inner) => TZ_VARIANTS
                .get(inner.index as usize)
                .map(|tz| tz.name)
                .unwrap_or("UTC"),
        }
    }

    /// Get the POSIX TZ rule string for this timezone.
    pub fn posix_tz(&self) -> &'static str {
        match self {
            Tz::Utc => FALLBACK_POSIX_TZ,
            Tz::Named(inner) => TZ_VARIANTS
                .get(inner.index as usize)
                .map(|tz| tz.posix_tz)
                .unwrap_or(FALLBACK_POSIX_TZ),
        }
    }
}

impl fmt::Display for Tz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Tz {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "UTC" || s == "Etc/UTC" || s == "Etc/GMT" {
            return Ok(Tz::Utc);
        }

        // Find the timezone in our list
        match TZ_VARIANTS.binary_search_by(|tz| tz.name.cmp(s)) {
            Ok(idx) => Ok(Tz::Named(TzInner { index: idx as u16 })),
            Err(_) => Err(ParseError {
                name: s.to_string(),
            }),
        }
    }
}

/// Error returned when parsing an invalid timezone name.
#[derive(Debug, Clone)]
pub struct ParseError {
    name: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid timezone: {}", self.name)
    }
}

impl std::error::Error for ParseError {}
