// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compiled-in timezone rules for the LED clock display.
//!
//! This library maps IANA zone identifiers to POSIX TZ rule strings so the
//! clock firmware can hand a rule straight to its POSIX timezone engine
//! without carrying a tzdata compiler or the full transition database. The
//! table covers the zones the display supports (~80 entries, a few bytes
//! each) and is immutable for the lifetime of the process.
//!
//! # Lookup semantics
//!
//! Matching is exact and case-sensitive. [`posix_tz`] never fails: a name
//! that is not in the table resolves to `"UTC0"`, indistinguishable from the
//! real UTC mapping. This is deliberate — the display always has *some* rule
//! to run with — but callers that need to detect a miss can use
//! [`lookup_timezone`] or parse a [`Tz`] instead.
//!
//! # Example
//!
//! ```
//! use ledclock_tz::posix_tz;
//!
//! assert_eq!(posix_tz("Europe/London"), "GMT0BST,M3.5.0/1,M10.5.0");
//! assert_eq!(posix_tz("Not/AZone"), "UTC0");
//! ```

mod mapping;
mod wrapper;

pub use mapping::{
    list_timezones, lookup_timezone, posix_tz, Timezone, FALLBACK_POSIX_TZ, TZ_VARIANTS,
};
pub use wrapper::{ParseError, Tz};

/// The UTC timezone.
pub const UTC: Tz = Tz::Utc;

#[cfg(test)]
mod tests;
