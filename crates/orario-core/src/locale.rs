//! Static locale table for date/time display.
//!
//! Each locale bundles the month and weekday names, their short forms,
//! the meridiem markers, and a date pattern typical for that language.
//! The table is built at compile time and never mutated. Unknown codes
//! fall back to [`FALLBACK`].

/// Language code used when a requested code is not in the table.
pub const FALLBACK: &str = "en-GB";

/// Display rules for one language.
#[derive(Debug)]
pub struct Locale {
    /// Language code, e.g. "en-GB" or "de".
    pub code: &'static str,
    /// Full month names, January first.
    pub months: [&'static str; 12],
    /// Abbreviated month names.
    pub months_short: [&'static str; 12],
    /// Full weekday names, Sunday first.
    pub weekdays: [&'static str; 7],
    /// Abbreviated weekday names, Sunday first.
    pub weekdays_short: [&'static str; 7],
    /// Ante-meridiem marker.
    pub am: &'static str,
    /// Post-meridiem marker.
    pub pm: &'static str,
    /// Date pattern with the field ordering customary for this locale.
    pub date_format: &'static str,
}

/// Looks up a locale by language code, falling back to [`FALLBACK`].
///
/// Matching is case-insensitive and accepts `_` in place of `-`
/// (so "en_gb" resolves to "en-GB").
pub fn lookup(code: &str) -> &'static Locale {
    find(code).unwrap_or_else(|| {
        find(FALLBACK).unwrap_or(&LOCALES[0]) // table always contains the fallback
    })
}

/// Looks up a locale by language code without falling back.
pub fn find(code: &str) -> Option<&'static Locale> {
    LOCALES.iter().find(|l| code_matches(l.code, code))
}

fn code_matches(entry: &str, requested: &str) -> bool {
    entry.len() == requested.len()
        && entry.chars().zip(requested.chars()).all(|(a, b)| {
            a.eq_ignore_ascii_case(&b) || (matches!(a, '-' | '_') && matches!(b, '-' | '_'))
        })
}

static LOCALES: &[Locale] = &[
    Locale {
        code: "en-GB",
        months: [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
        months_short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        weekdays: [
            "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
        ],
        weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        am: "AM",
        pm: "PM",
        date_format: "%A %-d %B %Y",
    },
    Locale {
        code: "en-US",
        months: [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
        months_short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        weekdays: [
            "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
        ],
        weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        am: "AM",
        pm: "PM",
        date_format: "%A, %B %-d, %Y",
    },
    Locale {
        code: "de",
        months: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
            "September", "Oktober", "November", "Dezember",
        ],
        months_short: [
            "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
        ],
        weekdays: [
            "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
        ],
        weekdays_short: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
        am: "vorm.",
        pm: "nachm.",
        date_format: "%A, %-d. %B %Y",
    },
    Locale {
        code: "fr",
        months: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ],
        months_short: [
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ],
        weekdays: [
            "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
        ],
        weekdays_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
        am: "AM",
        pm: "PM",
        date_format: "%A %-d %B %Y",
    },
    Locale {
        code: "es",
        months: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        months_short: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
        ],
        weekdays: [
            "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
        ],
        weekdays_short: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
        am: "a. m.",
        pm: "p. m.",
        date_format: "%A, %-d de %B de %Y",
    },
    Locale {
        code: "it",
        months: [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ],
        months_short: [
            "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
        ],
        weekdays: [
            "domenica", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
        ],
        weekdays_short: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
        am: "AM",
        pm: "PM",
        date_format: "%A %-d %B %Y",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_falls_back() {
        // Act
        let locale = lookup("xx-YY");

        // Assert
        assert_eq!(locale.code, FALLBACK);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        // Act / Assert
        assert_eq!(lookup("EN-us").code, "en-US");
        assert_eq!(lookup("De").code, "de");
    }

    #[test]
    fn underscore_matches_hyphen() {
        // Act / Assert
        assert_eq!(lookup("en_GB").code, "en-GB");
    }

    #[test]
    fn find_returns_none_for_unknown() {
        // Act / Assert
        assert!(find("tlh").is_none());
    }

    #[test]
    fn table_entries_are_complete() {
        // Every locale must have non-empty names everywhere; a blank
        // entry would render as a hole in the display.
        for locale in LOCALES {
            assert!(!locale.code.is_empty());
            assert!(locale.months.iter().all(|m| !m.is_empty()), "{}", locale.code);
            assert!(locale.months_short.iter().all(|m| !m.is_empty()));
            assert!(locale.weekdays.iter().all(|d| !d.is_empty()));
            assert!(locale.weekdays_short.iter().all(|d| !d.is_empty()));
            assert!(!locale.am.is_empty() && !locale.pm.is_empty());
            assert!(!locale.date_format.is_empty());
        }
    }

    #[test]
    fn fallback_is_in_table() {
        // Act / Assert
        assert!(find(FALLBACK).is_some());
    }
}
