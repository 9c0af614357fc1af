//! Locale-aware strftime-style date/time formatting.

use chrono::{Datelike, Timelike};

use crate::locale::Locale;

/// Formats a date/time using a strftime-like format string and the
/// names from `locale`.
///
/// Supports: `%H` `%M` `%S` `%I` (12-hour) `%p` (meridiem), `%A` `%a`
/// (weekday), `%d` `%m`, `%B` `%b` (month name), `%Y` `%y`, `%%`
/// (literal %). A `-` between `%` and the letter suppresses zero
/// padding: `%-I`, `%-H`, `%-d`, `%-m`. Unrecognized sequences are
/// copied through unchanged.
pub fn format<T: Datelike + Timelike>(now: &T, fmt: &str, locale: &Locale) -> String {
    let mut result = String::with_capacity(fmt.len() + 16);
    let mut chars = fmt.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }
        let (pad, token) = match chars.next() {
            Some('-') => (false, chars.next()),
            other => (true, other),
        };
        match token {
            Some('H') => push_num(&mut result, now.hour(), pad),
            Some('M') => push_num(&mut result, now.minute(), pad),
            Some('S') => push_num(&mut result, now.second(), pad),
            Some('I') => push_num(&mut result, now.hour12().1, pad),
            Some('p') => {
                let (pm, _) = now.hour12();
                result.push_str(if pm { locale.pm } else { locale.am });
            }
            Some('A') => push_name(&mut result, &locale.weekdays, weekday_index(now)),
            Some('a') => push_name(&mut result, &locale.weekdays_short, weekday_index(now)),
            Some('d') => push_num(&mut result, now.day(), pad),
            Some('m') => push_num(&mut result, now.month(), pad),
            Some('B') => push_name(&mut result, &locale.months, now.month0() as usize),
            Some('b') => push_name(&mut result, &locale.months_short, now.month0() as usize),
            Some('Y') => result.push_str(&now.year().to_string()),
            Some('y') => push_num(&mut result, (now.year().rem_euclid(100)) as u32, pad),
            Some('%') => result.push('%'),
            Some(other) => {
                result.push('%');
                if !pad {
                    result.push('-');
                }
                result.push(other);
            }
            None => result.push('%'),
        }
    }

    result
}

fn weekday_index<T: Datelike>(now: &T) -> usize {
    now.weekday().num_days_from_sunday() as usize
}

fn push_num(out: &mut String, value: u32, pad: bool) {
    if pad {
        out.push_str(&format!("{value:02}"));
    } else {
        out.push_str(&value.to_string());
    }
}

fn push_name(out: &mut String, names: &[&str], index: usize) {
    out.push_str(names.get(index).unwrap_or(&"???"));
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::locale;

    fn sample() -> chrono::NaiveDateTime {
        // Monday 2 March 2026, 09:05:07.
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn twenty_four_hour_time_is_zero_padded() {
        // Act
        let text = format(&sample(), "%H:%M:%S", locale::lookup("en-GB"));

        // Assert
        assert_eq!(text, "09:05:07");
    }

    #[test]
    fn twelve_hour_time_drops_leading_zero() {
        // Act
        let text = format(&sample(), "%-I:%M:%S %p", locale::lookup("en-GB"));

        // Assert
        assert_eq!(text, "9:05:07 AM");
    }

    #[test]
    fn midnight_and_noon_map_to_twelve() {
        // Arrange
        let midnight = sample().with_hour(0).unwrap();
        let noon = sample().with_hour(12).unwrap();
        let en = locale::lookup("en-GB");

        // Act / Assert
        assert_eq!(format(&midnight, "%-I %p", en), "12 AM");
        assert_eq!(format(&noon, "%-I %p", en), "12 PM");
    }

    #[test]
    fn names_come_from_the_locale() {
        // Act
        let de = format(&sample(), "%A, %-d. %B %Y", locale::lookup("de"));
        let fr = format(&sample(), "%A %-d %B %Y", locale::lookup("fr"));

        // Assert
        assert_eq!(de, "Montag, 2. März 2026");
        assert_eq!(fr, "lundi 2 mars 2026");
    }

    #[test]
    fn short_names_and_two_digit_year() {
        // Act
        let text = format(&sample(), "%a %d %b '%y", locale::lookup("en-US"));

        // Assert
        assert_eq!(text, "Mon 02 Mar '26");
    }

    #[test]
    fn literal_percent_and_unknown_tokens_pass_through() {
        // Act
        let en = locale::lookup("en-GB");

        // Assert
        assert_eq!(format(&sample(), "100%%", en), "100%");
        assert_eq!(format(&sample(), "%Q", en), "%Q");
        assert_eq!(format(&sample(), "%-Q", en), "%-Q");
        assert_eq!(format(&sample(), "%", en), "%");
    }
}
