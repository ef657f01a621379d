// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Abbreviated day-of-week names per language.
//!
//! Arrays are Sunday-first so an entry can be indexed directly with
//! `tm_wday` / `num_days_from_sunday()`. Abbreviations are kept short enough
//! for a 32-pixel-wide matrix; a few languages (Estonian) use two letters.

use once_cell::sync::Lazy;
use tracing::trace;

use crate::FALLBACK_LANG;

/// Day names for one language.
#[derive(Debug, Clone, Copy)]
pub struct DaysOfWeek {
    /// ISO 639-1 language code (e.g., "en")
    pub lang: &'static str,
    /// Abbreviated day names, Sunday to Saturday
    pub abbr: [&'static str; 7],
}

/// All day-name entries, sorted by language code for binary search.
pub static DAY_TABLE: &[DaysOfWeek] = &[
    DaysOfWeek {
        lang: "af",
        abbr: ["sun", "maa", "din", "woe", "don", "vry", "son"],
    },
    DaysOfWeek {
        lang: "cs",
        abbr: ["ned", "pon", "ute", "str", "ctv", "pat", "sob"],
    },
    DaysOfWeek {
        lang: "da",
        abbr: ["son", "man", "tir", "ons", "tor", "fre", "lor"],
    },
    DaysOfWeek {
        lang: "de",
        abbr: ["son", "mon", "die", "mit", "don", "fre", "sam"],
    },
    DaysOfWeek {
        lang: "en",
        abbr: ["sun", "mon", "tue", "wed", "thu", "fri", "sat"],
    },
    DaysOfWeek {
        lang: "eo",
        abbr: ["dim", "lun", "mar", "mer", "jau", "ven", "sab"],
    },
    DaysOfWeek {
        lang: "es",
        abbr: ["dom", "lun", "mar", "mie", "jue", "vie", "sab"],
    },
    DaysOfWeek {
        lang: "et",
        abbr: ["pa", "es", "te", "ko", "ne", "re", "la"],
    },
    DaysOfWeek {
        lang: "fi",
        abbr: ["sun", "maa", "tis", "kes", "tor", "per", "lau"],
    },
    DaysOfWeek {
        lang: "fr",
        abbr: ["dim", "lun", "mar", "mer", "jeu", "ven", "sam"],
    },
    DaysOfWeek {
        lang: "hr",
        abbr: ["ned", "pon", "uto", "sri", "cet", "pet", "sub"],
    },
    DaysOfWeek {
        lang: "hu",
        abbr: ["vas", "het", "ked", "sze", "csu", "pet", "szo"],
    },
    DaysOfWeek {
        lang: "it",
        abbr: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
    },
    DaysOfWeek {
        lang: "ja",
        abbr: ["日", "月", "火", "水", "木", "金", "土"],
    },
    DaysOfWeek {
        lang: "lt",
        abbr: ["sek", "pir", "ant", "tre", "ket", "pen", "ses"],
    },
    DaysOfWeek {
        lang: "lv",
        abbr: ["sve", "pir", "otr", "tre", "cet", "pie", "ses"],
    },
    DaysOfWeek {
        lang: "nl",
        abbr: ["zon", "maa", "din", "woe", "don", "vri", "zat"],
    },
    DaysOfWeek {
        lang: "no",
        abbr: ["son", "man", "tir", "ons", "tor", "fre", "lor"],
    },
    DaysOfWeek {
        lang: "pl",
        abbr: ["nie", "pon", "wto", "sro", "czw", "pia", "sob"],
    },
    DaysOfWeek {
        lang: "pt",
        abbr: ["dom", "seg", "ter", "qua", "qui", "sex", "sab"],
    },
    DaysOfWeek {
        lang: "ro",
        abbr: ["dum", "lun", "mar", "mie", "joi", "vin", "sam"],
    },
    DaysOfWeek {
        lang: "sk",
        abbr: ["ned", "pon", "uto", "str", "stv", "pia", "sob"],
    },
    DaysOfWeek {
        lang: "sl",
        abbr: ["ned", "pon", "tor", "sre", "cet", "pet", "sob"],
    },
    DaysOfWeek {
        lang: "sv",
        abbr: ["son", "man", "tis", "ons", "tor", "fre", "lor"],
    },
    DaysOfWeek {
        lang: "sw",
        abbr: ["jpl", "jum", "jtt", "jtn", "alk", "ijm", "jms"],
    },
    // Turkish: Sunday/Monday and Friday/Saturday share an abbreviation
    DaysOfWeek {
        lang: "tr",
        abbr: ["paz", "paz", "sal", "car", "per", "cum", "cum"],
    },
];

/// Cached English entry, located by key rather than position.
static EN_DAYS: Lazy<&'static DaysOfWeek> =
    Lazy::new(|| lookup_days(FALLBACK_LANG).unwrap_or(&DAY_TABLE[0]));

/// Look up the day-name entry for a language code.
pub fn lookup_days(lang: &str) -> Option<&'static DaysOfWeek> {
    DAY_TABLE
        .binary_search_by(|entry| entry.lang.cmp(lang))
        .ok()
        .map(|idx| &DAY_TABLE[idx])
}

/// Get abbreviated day names for a language, Sunday first.
///
/// The match is exact and case-sensitive. Unknown languages resolve to the
/// English entry.
pub fn days_of_week(lang: &str) -> &'static [&'static str; 7] {
    match lookup_days(lang) {
        Some(entry) => &entry.abbr,
        None => {
            trace!("no day names for {:?}, using {}", lang, FALLBACK_LANG);
            &EN_DAYS.abbr
        },
    }
}

/// List the language codes with day names, in sorted order.
pub fn list_day_languages() -> impl Iterator<Item = &'static str> {
    DAY_TABLE.iter().map(|entry| entry.lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_order_is_sunday_first() {
        assert_eq!(
            days_of_week("en"),
            &["sun", "mon", "tue", "wed", "thu", "fri", "sat"]
        );
    }

    #[test]
    fn test_sample_languages() {
        assert_eq!(days_of_week("es")[0], "dom");
        assert_eq!(days_of_week("de")[3], "mit");
        assert_eq!(days_of_week("ja")[0], "日");
        // Estonian uses two-letter abbreviations
        assert_eq!(days_of_week("et"), &["pa", "es", "te", "ko", "ne", "re", "la"]);
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(days_of_week("xx"), days_of_week("en"));
        assert_eq!(days_of_week(""), days_of_week("en"));
        // Codes match case-sensitively
        assert_eq!(days_of_week("EN"), days_of_week("en"));
    }

    #[test]
    fn test_fallback_is_the_english_entry() {
        assert!(std::ptr::eq(days_of_week("zz"), days_of_week("en")));
    }

    #[test]
    fn test_table_sorted_and_unique() {
        for w in DAY_TABLE.windows(2) {
            assert!(w[0].lang < w[1].lang, "{} vs {}", w[0].lang, w[1].lang);
        }
    }
}
