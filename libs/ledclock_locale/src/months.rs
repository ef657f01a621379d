// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Abbreviated month names per language.
//!
//! Arrays are January-first; index with `month - 1`. The language set is a
//! superset of the day-name table (Irish and Serbian have month entries
//! only).

use once_cell::sync::Lazy;
use tracing::trace;

use crate::FALLBACK_LANG;

/// Month names for one language.
#[derive(Debug, Clone, Copy)]
pub struct MonthsOfYear {
    /// ISO 639-1 language code (e.g., "en")
    pub lang: &'static str,
    /// Abbreviated month names, January to December
    pub abbr: [&'static str; 12],
}

/// All month-name entries, sorted by language code for binary search.
pub static MONTH_TABLE: &[MonthsOfYear] = &[
    // Afrikaans
    MonthsOfYear {
        lang: "af",
        abbr: [
            "jan", "feb", "mar", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "des",
        ],
    },
    // Czech
    MonthsOfYear {
        lang: "cs",
        abbr: [
            "led", "uno", "bre", "dub", "kve", "cer", "cvc", "srp", "zar", "rij", "lis", "pro",
        ],
    },
    // Danish
    MonthsOfYear {
        lang: "da",
        abbr: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ],
    },
    // German
    MonthsOfYear {
        lang: "de",
        abbr: [
            "jan", "feb", "mar", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "dez",
        ],
    },
    // English
    MonthsOfYear {
        lang: "en",
        abbr: [
            "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
        ],
    },
    // Esperanto
    MonthsOfYear {
        lang: "eo",
        abbr: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ],
    },
    // Spanish
    MonthsOfYear {
        lang: "es",
        abbr: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
        ],
    },
    // Estonian
    MonthsOfYear {
        lang: "et",
        abbr: [
            "jan", "veb", "mar", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "det",
        ],
    },
    // Finnish
    MonthsOfYear {
        lang: "fi",
        abbr: [
            "tam", "hel", "maa", "huh", "tou", "kes", "hei", "elo", "syy", "lok", "mar", "jou",
        ],
    },
    // French
    MonthsOfYear {
        lang: "fr",
        abbr: [
            "jan", "fev", "mar", "avr", "mai", "jun", "jul", "aou", "sep", "oct", "nov", "dec",
        ],
    },
    // Irish
    MonthsOfYear {
        lang: "ga",
        abbr: [
            "ean", "fea", "mar", "aib", "bea", "mei", "iui", "lun", "mea", "dei", "sam", "nol",
        ],
    },
    // Croatian
    MonthsOfYear {
        lang: "hr",
        abbr: [
            "sij", "vel", "ozu", "tra", "svi", "lip", "srp", "kol", "ruj", "lis", "stu", "pro",
        ],
    },
    // Hungarian
    MonthsOfYear {
        lang: "hu",
        abbr: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sze", "okt", "nov", "dec",
        ],
    },
    // Italian
    MonthsOfYear {
        lang: "it",
        abbr: [
            "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
        ],
    },
    // Japanese
    MonthsOfYear {
        lang: "ja",
        abbr: [
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        ],
    },
    // Lithuanian
    MonthsOfYear {
        lang: "lt",
        abbr: [
            "sau", "vas", "kov", "bal", "geg", "bir", "lie", "rug", "swe", "spa", "lap", "gru",
        ],
    },
    // Latvian
    MonthsOfYear {
        lang: "lv",
        abbr: [
            "jan", "feb", "mar", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ],
    },
    // Dutch
    MonthsOfYear {
        lang: "nl",
        abbr: [
            "jan", "feb", "maa", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ],
    },
    // Norwegian
    MonthsOfYear {
        lang: "no",
        abbr: [
            "jan", "feb", "mar", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "des",
        ],
    },
    // Polish
    MonthsOfYear {
        lang: "pl",
        abbr: [
            "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paz", "lis", "gru",
        ],
    },
    // Portuguese
    MonthsOfYear {
        lang: "pt",
        abbr: [
            "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
        ],
    },
    // Romanian
    MonthsOfYear {
        lang: "ro",
        abbr: [
            "ian", "feb", "mar", "apr", "mai", "iun", "iul", "aug", "sep", "oct", "nov", "dec",
        ],
    },
    // Slovak
    MonthsOfYear {
        lang: "sk",
        abbr: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ],
    },
    // Slovenian
    MonthsOfYear {
        lang: "sl",
        abbr: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "avg", "sep", "okt", "nov", "dec",
        ],
    },
    // Serbian
    MonthsOfYear {
        lang: "sr",
        abbr: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "avg", "sep", "okt", "nov", "dec",
        ],
    },
    // Swedish
    MonthsOfYear {
        lang: "sv",
        abbr: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ],
    },
    // Swahili
    MonthsOfYear {
        lang: "sw",
        abbr: [
            "jan", "feb", "mar", "apr", "mei", "jun", "jul", "ago", "sep", "okt", "nov", "des",
        ],
    },
    // Turkish
    MonthsOfYear {
        lang: "tr",
        abbr: [
            "oca", "sub", "mar", "nis", "may", "haz", "tem", "agu", "eyl", "eki", "kas", "ara",
        ],
    },
];

/// Cached English entry, located by key rather than position.
static EN_MONTHS: Lazy<&'static MonthsOfYear> =
    Lazy::new(|| lookup_months(FALLBACK_LANG).unwrap_or(&MONTH_TABLE[0]));

/// Look up the month-name entry for a language code.
pub fn lookup_months(lang: &str) -> Option<&'static MonthsOfYear> {
    MONTH_TABLE
        .binary_search_by(|entry| entry.lang.cmp(lang))
        .ok()
        .map(|idx| &MONTH_TABLE[idx])
}

/// Get abbreviated month names for a language, January first.
///
/// The match is exact and case-sensitive. Unknown languages resolve to the
/// English entry.
pub fn months_of_year(lang: &str) -> &'static [&'static str; 12] {
    match lookup_months(lang) {
        Some(entry) => &entry.abbr,
        None => {
            trace!("no month names for {:?}, using {}", lang, FALLBACK_LANG);
            &EN_MONTHS.abbr
        },
    }
}

/// List the language codes with month names, in sorted order.
pub fn list_month_languages() -> impl Iterator<Item = &'static str> {
    MONTH_TABLE.iter().map(|entry| entry.lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_order_is_january_first() {
        assert_eq!(
            months_of_year("en"),
            &["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"]
        );
    }

    #[test]
    fn test_sample_languages() {
        assert_eq!(months_of_year("fi")[0], "tam");
        assert_eq!(months_of_year("tr")[11], "ara");
        assert_eq!(months_of_year("ja")[9], "10月");
        // Irish has month names but no day names
        assert_eq!(months_of_year("ga")[0], "ean");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(months_of_year("xx"), months_of_year("en"));
        assert_eq!(months_of_year("EN"), months_of_year("en"));
    }

    #[test]
    fn test_fallback_is_the_english_entry() {
        assert!(std::ptr::eq(months_of_year("zz"), months_of_year("en")));
    }

    #[test]
    fn test_table_sorted_and_unique() {
        for w in MONTH_TABLE.windows(2) {
            assert!(w[0].lang < w[1].lang, "{} vs {}", w[0].lang, w[1].lang);
        }
    }
}
