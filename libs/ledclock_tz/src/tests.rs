// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::mapping::{list_timezones, lookup_timezone, posix_tz, FALLBACK_POSIX_TZ, TZ_VARIANTS};

#[test]
fn test_exact_rule_lookup() {
    assert_eq!(posix_tz("Europe/London"), "GMT0BST,M3.5.0/1,M10.5.0");
    assert_eq!(posix_tz("America/New_York"), "EST5EDT,M3.2.0,M11.1.0");
    assert_eq!(posix_tz("Asia/Tokyo"), "JST-9");
    // Fractional standard offsets survive intact
    assert_eq!(posix_tz("Asia/Kathmandu"), "NPT-5:45");
    assert_eq!(posix_tz("Pacific/Chatham"), "CHAST-12:45CHADT,M9.5.0,M4.1.0/3");
}

#[test]
fn test_unknown_zone_falls_back() {
    assert_eq!(posix_tz("Not/AZone"), FALLBACK_POSIX_TZ);
    assert_eq!(posix_tz(""), FALLBACK_POSIX_TZ);
}

#[test]
fn test_match_is_case_sensitive() {
    assert_eq!(posix_tz("europe/london"), FALLBACK_POSIX_TZ);
    assert_eq!(posix_tz("EUROPE/LONDON"), FALLBACK_POSIX_TZ);
}

#[test]
fn test_utc_maps_to_fallback_rule() {
    // A real UTC lookup and a miss are indistinguishable through posix_tz
    assert_eq!(posix_tz("UTC"), "UTC0");
    assert!(lookup_timezone("UTC").is_some());
    assert!(lookup_timezone("Not/AZone").is_none());
}

#[test]
fn test_etc_gmt_signs_inverted() {
    // Etc/GMT+1 is UTC-1 and vice versa, per the POSIX convention
    assert_eq!(posix_tz("Etc/GMT+1"), "GMT-1");
    assert_eq!(posix_tz("Etc/GMT-1"), "GMT+1");
}

#[test]
fn test_lookup_timezone() {
    let tz = lookup_timezone("America/New_York").unwrap();
    assert_eq!(tz.name, "America/New_York");
    assert_eq!(tz.posix_tz, "EST5EDT,M3.2.0,M11.1.0");

    let tz = lookup_timezone("Australia/Adelaide").unwrap();
    assert_eq!(tz.posix_tz, "ACST-9:30ACDT,M10.1.0,M4.1.0");
}

#[test]
fn test_list_timezones() {
    let zones: Vec<_> = list_timezones().collect();
    assert_eq!(zones.len(), TZ_VARIANTS.len());
    assert!(zones.contains(&"UTC"));
    assert!(zones.contains(&"America/New_York"));
    assert!(zones.contains(&"Europe/London"));
    assert!(zones.contains(&"Asia/Tokyo"));
}

#[test]
fn test_timezones_sorted_and_unique() {
    // Binary search and first-match-wins both rest on this
    for w in TZ_VARIANTS.windows(2) {
        assert!(
            w[0].name < w[1].name,
            "out of order or duplicate: {} vs {}",
            w[0].name,
            w[1].name
        );
    }
}

#[test]
fn test_lookup_is_idempotent() {
    let first = posix_tz("Europe/Berlin");
    let second = posix_tz("Europe/Berlin");
    assert_eq!(first, second);
    // Same static data, not a fresh allocation
    assert!(std::ptr::eq(first, second));
}
