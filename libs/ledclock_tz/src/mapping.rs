// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Static IANA-to-POSIX timezone rule table.
//!
//! Each entry maps an IANA zone identifier to the POSIX TZ rule string that a
//! POSIX-style timezone engine (e.g. newlib's `setenv("TZ", ...)`) consumes
//! directly. Rule strings encode the standard offset and, where the zone
//! observes daylight saving time, the DST offset and transition rules.

use tracing::trace;

/// POSIX rule substituted when a zone name is not in the table.
pub const FALLBACK_POSIX_TZ: &str = "UTC0";

/// A single zone mapping.
#[derive(Debug, Clone, Copy)]
pub struct Timezone {
    /// IANA timezone name (e.g., "America/New_York")
    pub name: &'static str,
    /// POSIX TZ rule string (e.g., "EST5EDT,M3.2.0,M11.1.0")
    pub posix_tz: &'static str,
}

/// All zone mappings, sorted by name for binary search.
#[rustfmt::skip]
pub static TZ_VARIANTS: &[Timezone] = &[
    // Africa
    Timezone { name: "Africa/Cairo", posix_tz: "EET-2EEST,M4.5.5/0,M10.5.5/0" },
    Timezone { name: "Africa/Casablanca", posix_tz: "WET0WEST,M3.5.0/0,M10.5.0/0" },
    Timezone { name: "Africa/Johannesburg", posix_tz: "SAST-2" },
    // Americas
    Timezone { name: "America/Anchorage", posix_tz: "AKST9AKDT,M3.2.0,M11.1.0" },
    Timezone { name: "America/Argentina/Buenos_Aires", posix_tz: "ART3" },
    Timezone { name: "America/Chicago", posix_tz: "CST6CDT,M3.2.0,M11.1.0" },
    Timezone { name: "America/Denver", posix_tz: "MST7MDT,M3.2.0,M11.1.0" },
    Timezone { name: "America/Guatemala", posix_tz: "CST6" },
    Timezone { name: "America/Halifax", posix_tz: "AST4ADT,M3.2.0,M11.1.0" },
    Timezone { name: "America/Los_Angeles", posix_tz: "PST8PDT,M3.2.0,M11.1.0" },
    Timezone { name: "America/Mexico_City", posix_tz: "CST6CDT,M4.1.0,M10.5.0" },
    Timezone { name: "America/New_York", posix_tz: "EST5EDT,M3.2.0,M11.1.0" },
    Timezone { name: "America/Phoenix", posix_tz: "MST7" },
    Timezone { name: "America/Santiago", posix_tz: "CLT4CLST,M9.1.6/24,M4.1.6/24" },
    Timezone { name: "America/Sao_Paulo", posix_tz: "BRT3" },
    Timezone { name: "America/St_Johns", posix_tz: "NST3:30NDT,M3.2.0,M11.1.0" },
    Timezone { name: "America/Toronto", posix_tz: "EST5EDT,M3.2.0,M11.1.0" },
    Timezone { name: "America/Vancouver", posix_tz: "PST8PDT,M3.2.0,M11.1.0" },
    // Asia
    Timezone { name: "Asia/Almaty", posix_tz: "ALMT-6" },
    Timezone { name: "Asia/Amman", posix_tz: "EET-2EEST,M3.5.4/24,M10.5.5/1" },
    Timezone { name: "Asia/Baghdad", posix_tz: "AST-3" },
    Timezone { name: "Asia/Bangkok", posix_tz: "ICT-7" },
    Timezone { name: "Asia/Beirut", posix_tz: "EET-2EEST,M3.5.0/0,M10.5.0/0" },
    Timezone { name: "Asia/Dhaka", posix_tz: "BDT-6" },
    Timezone { name: "Asia/Dubai", posix_tz: "GST-4" },
    Timezone { name: "Asia/Ho_Chi_Minh", posix_tz: "ICT-7" },
    Timezone { name: "Asia/Hong_Kong", posix_tz: "HKT-8" },
    Timezone { name: "Asia/Jakarta", posix_tz: "WIB-7" },
    Timezone { name: "Asia/Jerusalem", posix_tz: "IST-2IDT,M3.4.4/26,M10.5.0" },
    Timezone { name: "Asia/Karachi", posix_tz: "PKT-5" },
    Timezone { name: "Asia/Kathmandu", posix_tz: "NPT-5:45" },
    Timezone { name: "Asia/Kolkata", posix_tz: "IST-5:30" },
    Timezone { name: "Asia/Kuala_Lumpur", posix_tz: "MYT-8" },
    Timezone { name: "Asia/Manila", posix_tz: "PST-8" },
    Timezone { name: "Asia/Seoul", posix_tz: "KST-9" },
    Timezone { name: "Asia/Shanghai", posix_tz: "CST-8" },
    Timezone { name: "Asia/Singapore", posix_tz: "SGT-8" },
    Timezone { name: "Asia/Taipei", posix_tz: "CST-8" },
    Timezone { name: "Asia/Tashkent", posix_tz: "UZT-5" },
    Timezone { name: "Asia/Tokyo", posix_tz: "JST-9" },
    Timezone { name: "Asia/Ulaanbaatar", posix_tz: "ULAT-8" },
    Timezone { name: "Asia/Yekaterinburg", posix_tz: "YEKT-5" },
    // Atlantic
    Timezone { name: "Atlantic/Azores", posix_tz: "AZOT1AZOST,M3.5.0/0,M10.5.0/0" },
    Timezone { name: "Atlantic/Reykjavik", posix_tz: "GMT0" },
    // Australia
    Timezone { name: "Australia/Adelaide", posix_tz: "ACST-9:30ACDT,M10.1.0,M4.1.0" },
    Timezone { name: "Australia/Brisbane", posix_tz: "AEST-10" },
    Timezone { name: "Australia/Darwin", posix_tz: "ACST-9:30" },
    Timezone { name: "Australia/Hobart", posix_tz: "AEST-10AEDT,M10.1.0,M4.1.0" },
    Timezone { name: "Australia/Melbourne", posix_tz: "AEST-10AEDT,M10.1.0,M4.1.0" },
    Timezone { name: "Australia/Perth", posix_tz: "AWST-8" },
    Timezone { name: "Australia/Sydney", posix_tz: "AEST-10AEDT,M10.1.0,M4.1.0" },
    // Fixed whole-hour offsets (note: Etc/GMT signs are inverted)
    Timezone { name: "Etc/GMT+1", posix_tz: "GMT-1" },
    Timezone { name: "Etc/GMT-1", posix_tz: "GMT+1" },
    // Europe
    Timezone { name: "Europe/Amsterdam", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Athens", posix_tz: "EET-2EEST,M3.5.0/3,M10.5.0/4" },
    Timezone { name: "Europe/Belgrade", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Berlin", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Brussels", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Bucharest", posix_tz: "EET-2EEST,M3.5.0/3,M10.5.0/4" },
    Timezone { name: "Europe/Copenhagen", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Dublin", posix_tz: "GMT0IST,M3.5.0/1,M10.5.0" },
    Timezone { name: "Europe/Helsinki", posix_tz: "EET-2EEST,M3.5.0/3,M10.5.0/4" },
    Timezone { name: "Europe/Istanbul", posix_tz: "TRT-3" },
    Timezone { name: "Europe/Kiev", posix_tz: "EET-2EEST,M3.5.0/3,M10.5.0/4" },
    Timezone { name: "Europe/Lisbon", posix_tz: "WET0WEST,M3.5.0/0,M10.5.0/0" },
    Timezone { name: "Europe/London", posix_tz: "GMT0BST,M3.5.0/1,M10.5.0" },
    Timezone { name: "Europe/Madrid", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Moscow", posix_tz: "MSK-3" },
    Timezone { name: "Europe/Oslo", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Paris", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Prague", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Rome", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Stockholm", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    Timezone { name: "Europe/Warsaw", posix_tz: "CET-1CEST,M3.5.0,M10.5.0/3" },
    // Pacific
    Timezone { name: "Pacific/Auckland", posix_tz: "NZST-12NZDT,M9.5.0,M4.1.0" },
    Timezone { name: "Pacific/Chatham", posix_tz: "CHAST-12:45CHADT,M9.5.0,M4.1.0/3" },
    Timezone { name: "Pacific/Fiji", posix_tz: "FJT-12" },
    Timezone { name: "Pacific/Guam", posix_tz: "ChST-10" },
    Timezone { name: "Pacific/Honolulu", posix_tz: "HST10" },
    Timezone { name: "Pacific/Port_Moresby", posix_tz: "PGT-10" },
    Timezone { name: "Pacific/Tahiti", posix_tz: "TAHT10" },
    Timezone { name: "UTC", posix_tz: "UTC0" },
];

/// Look up a zone mapping by IANA name.
pub fn lookup_timezone(name: &str) -> Option<&'static Timezone> {
    // Binary search since TZ_VARIANTS is sorted
    TZ_VARIANTS
        .binary_search_by(|tz| tz.name.cmp(name))
        .ok()
        .map(|idx| &TZ_VARIANTS[idx])
}

/// Get the POSIX TZ rule string for an IANA zone name.
///
/// The match is exact and case-sensitive. Unknown names resolve to
/// [`FALLBACK_POSIX_TZ`]; callers that need to distinguish a miss from a real
/// UTC mapping should use [`lookup_timezone`] instead.
pub fn posix_tz(iana: &str) -> &'static str {
    match lookup_timezone(iana) {
        Some(tz) => tz.posix_tz,
        None => {
            trace!("no rule for zone {:?}, using {}", iana, FALLBACK_POSIX_TZ);
            FALLBACK_POSIX_TZ
        },
    }
}

/// List all IANA zone names in the table, in sorted order.
pub fn list_timezones() -> impl Iterator<Item = &'static str> {
    TZ_VARIANTS.iter().map(|tz| tz.name)
}
