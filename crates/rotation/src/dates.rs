//! Date codec for pairing list names.
//!
//! Pairing lists are named `pairing(<date>)` with the date written in
//! [`BOARD_DATE_FORMAT`]. Reading and writing both go through this module so
//! the two sides cannot drift apart.

use chrono::{Days, NaiveDate};

use crate::{DateError, RotationError};

/// Day-month-year, zero padded: `10/01/2024` is the 10th of January 2024.
pub const BOARD_DATE_FORMAT: &str = "%d/%m/%Y";

const PAIRING_LIST_PREFIX: &str = "pairing";

/// Writes `date` in [`BOARD_DATE_FORMAT`].
pub fn format_board_date(date: NaiveDate) -> String {
    date.format(BOARD_DATE_FORMAT).to_string()
}

/// Parses a date written in [`BOARD_DATE_FORMAT`].
///
/// Only the canonical spelling is accepted (`1/1/2024` is rejected), so
/// `format_board_date(parse_board_date(s)?) == s` holds for every accepted `s`.
pub fn parse_board_date(text: &str) -> Result<NaiveDate, DateError> {
    let unparseable = || DateError::Unparseable {
        text: text.to_string(),
        format: BOARD_DATE_FORMAT,
    };
    let date = NaiveDate::parse_from_str(text, BOARD_DATE_FORMAT).map_err(|_| unparseable())?;
    if format_board_date(date) != text {
        return Err(unparseable());
    }
    Ok(date)
}

/// Name of the list holding the pairs for `date`.
pub fn pairing_list_name(date: NaiveDate) -> String {
    format!("{PAIRING_LIST_PREFIX}({})", format_board_date(date))
}

/// Reads the date out of a pairing list name.
///
/// The date is the text strictly between the first `(` and the last `)`.
pub fn date_from_list_name(list_name: &str) -> Result<NaiveDate, DateError> {
    let missing = || DateError::MissingParentheses {
        list_name: list_name.to_string(),
    };
    let open = list_name.find('(').ok_or_else(missing)?;
    let close = list_name.rfind(')').ok_or_else(missing)?;
    if close <= open {
        return Err(missing());
    }
    parse_board_date(&list_name[open + 1..close])
}

/// `base` moved `days` calendar days forward.
pub fn future_date(base: NaiveDate, days: u32) -> Result<NaiveDate, RotationError> {
    base.checked_add_days(Days::new(u64::from(days)))
        .ok_or(RotationError::DateOutOfRange { base, days })
}

pub(crate) fn is_pairing_list_name(lower_case_name: &str) -> bool {
    lower_case_name.starts_with(PAIRING_LIST_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_day_month_year() {
        assert_eq!(format_board_date(ymd(2024, 1, 10)), "10/01/2024");
        assert_eq!(pairing_list_name(ymd(2024, 1, 10)), "pairing(10/01/2024)");
    }

    #[test]
    fn parse_reverses_format() {
        for date in [ymd(2024, 1, 10), ymd(2024, 2, 29), ymd(1999, 12, 31), ymd(2031, 7, 4)] {
            assert_eq!(parse_board_date(&format_board_date(date)), Ok(date));
        }
    }

    #[test]
    fn non_canonical_spellings_are_rejected() {
        for text in ["1/1/2024", "2024-01-10", "10/01/24", " 10/01/2024", "31/02/2024", ""] {
            assert!(
                matches!(parse_board_date(text), Err(DateError::Unparseable { .. })),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn reads_date_between_outer_parentheses() {
        assert_eq!(date_from_list_name("pairing(10/01/2024)"), Ok(ymd(2024, 1, 10)));
        assert_eq!(date_from_list_name("Pairing (10/01/2024)"), Ok(ymd(2024, 1, 10)));
    }

    #[test]
    fn list_names_without_parentheses_are_reported() {
        for name in ["pairing", "pairing 10/01/2024", "pairing)10/01/2024(", "pairing(10/01/2024"] {
            assert_eq!(
                date_from_list_name(name),
                Err(DateError::MissingParentheses {
                    list_name: name.to_string()
                })
            );
        }
    }

    #[test]
    fn garbage_between_parentheses_is_unparseable() {
        assert!(matches!(
            date_from_list_name("pairing(tomorrow)"),
            Err(DateError::Unparseable { ref text, .. }) if text == "tomorrow"
        ));
    }

    #[test]
    fn future_date_adds_calendar_days() {
        assert_eq!(future_date(ymd(2024, 1, 10), 3).unwrap(), ymd(2024, 1, 13));
        assert_eq!(future_date(ymd(2024, 2, 28), 1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(future_date(ymd(2023, 12, 31), 1).unwrap(), ymd(2024, 1, 1));
        assert_eq!(future_date(ymd(2024, 1, 10), 0).unwrap(), ymd(2024, 1, 10));
    }

    #[test]
    fn future_date_overflow_is_an_error() {
        assert!(matches!(
            future_date(NaiveDate::MAX, 1),
            Err(RotationError::DateOutOfRange { days: 1, .. })
        ));
    }
}
