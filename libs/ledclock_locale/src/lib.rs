// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compiled-in day and month name tables for the LED clock display.
//!
//! The display renders dates with short, matrix-friendly abbreviations in
//! the user's configured language. This library bakes those abbreviations in
//! as two static tables keyed by ISO 639-1 language code:
//!
//! - [`days_of_week`] — 7 names, Sunday-first (`tm_wday` order)
//! - [`months_of_year`] — 12 names, January-first
//!
//! Position is significant: index 0 *is* Sunday (or January), so callers
//! index with the calendar value directly and never reorder the slices.
//!
//! # Lookup semantics
//!
//! Matching is exact and case-sensitive. Both resolvers are total: a
//! language without an entry resolves to the English names, so the display
//! always has something to draw. Callers that need to know whether a
//! language is actually supported can use [`lookup_days`] /
//! [`lookup_months`].
//!
//! # Example
//!
//! ```
//! use ledclock_locale::{days_of_week, months_of_year};
//!
//! assert_eq!(days_of_week("de")[0], "son");
//! assert_eq!(months_of_year("fr")[7], "aou");
//! // Unsupported languages fall back to English
//! assert_eq!(days_of_week("zz")[0], "sun");
//! ```

mod days;
mod months;

pub use days::{days_of_week, list_day_languages, lookup_days, DaysOfWeek, DAY_TABLE};
pub use months::{list_month_languages, lookup_months, months_of_year, MonthsOfYear, MONTH_TABLE};

/// Language substituted when a code has no entry.
pub const FALLBACK_LANG: &str = "en";

#[cfg(test)]
mod tests;
