//! Date formatting for the dashboard header.
//!
//! Two representations exist: the canonical data key (`YYYY-MM-DD`, the form
//! used in [`DateList`](super::dates::DateList)) and the human-readable form
//! shown in the date input and slider labels.

use chrono::NaiveDate;

use crate::shared::configuration::Configuration;

/// Canonical data key format
pub const DATA_DATE_FORMAT: &str = "%Y-%m-%d";

/// Forced display format (day before month)
pub const FORCED_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Short date of the default English locale, month and day unpadded
pub const LOCALE_SHORT_FORMAT: &str = "%-m/%-d/%Y";

/// Format a calendar date as the canonical `YYYY-MM-DD` key.
/// Example: 2020-03-05 -> "2020-03-05"
pub fn format_date_to_data(date: NaiveDate) -> String {
    date.format(DATA_DATE_FORMAT).to_string()
}

/// Format a date for display.
///
/// With `forceDateFormatFeature` the output is always `DD/MM/YYYY`; otherwise
/// the runtime locale's short form is used (English: `M/D/YYYY`, unpadded).
pub fn format_for_display(date: NaiveDate, config: &Configuration) -> String {
    if config.features.force_date_format_feature {
        return date.format(FORCED_DISPLAY_FORMAT).to_string();
    }
    format_locale_short(date)
}

/// Short date in the default English locale: 2020-03-05 -> "3/5/2020"
pub fn format_locale_short(date: NaiveDate) -> String {
    date.format(LOCALE_SHORT_FORMAT).to_string()
}

/// Display a `YYYY-MM-DD` key. Strings that do not parse are returned as is.
pub fn format_data_string_for_display(date_str: &str, config: &Configuration) -> String {
    match NaiveDate::parse_from_str(date_str, DATA_DATE_FORMAT) {
        Ok(date) => format_for_display(date, config),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, 5).unwrap()
    }

    #[test]
    fn test_format_date_to_data() {
        assert_eq!(format_date_to_data(march_5()), "2020-03-05");
        assert_eq!(
            format_date_to_data(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()),
            "2021-12-31"
        );
    }

    #[test]
    fn test_forced_format_puts_day_first() {
        let config = Configuration::with_forced_date_format(true);
        assert_eq!(format_for_display(march_5(), &config), "05/03/2020");
        assert_eq!(
            format_for_display(NaiveDate::from_ymd_opt(2020, 11, 23).unwrap(), &config),
            "23/11/2020"
        );
    }

    #[test]
    fn test_locale_default_format() {
        let config = Configuration::default();
        assert_eq!(format_for_display(march_5(), &config), "3/5/2020");
        assert_eq!(
            format_for_display(NaiveDate::from_ymd_opt(2020, 11, 23).unwrap(), &config),
            "11/23/2020"
        );
    }

    #[test]
    fn test_locale_short_padding() {
        assert_eq!(format_locale_short(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()), "1/1/2021");
        assert_eq!(
            format_locale_short(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()),
            "12/31/2021"
        );
    }

    #[test]
    fn test_format_data_string() {
        let forced = Configuration::with_forced_date_format(true);
        assert_eq!(format_data_string_for_display("2020-03-05", &forced), "05/03/2020");
        assert_eq!(format_data_string_for_display("not a date", &forced), "not a date");
    }
}
