//! Available dates and date-index resolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::display::{format_date_to_data, DATA_DATE_FORMAT};
use crate::shared::error::{DashboardError, DashboardResult};

/// Ordered, deduplicated list of available dates (`YYYY-MM-DD`), earliest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateList(Vec<String>);

impl DateList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Position of an exact `YYYY-MM-DD` match
    pub fn position(&self, date_key: &str) -> Option<usize> {
        self.0.iter().position(|d| d == date_key)
    }

    /// Index of the most recent date, `None` for an empty list
    pub fn latest_index(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// Earliest date, used as the lower bound of the date input
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.0.first().and_then(|d| parse_data_date(d))
    }

    /// Latest date, used as the upper bound of the date input
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.0.last().and_then(|d| parse_data_date(d))
    }

    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.get(index).and_then(parse_data_date)
    }
}

impl From<Vec<String>> for DateList {
    fn from(dates: Vec<String>) -> Self {
        Self(dates)
    }
}

impl From<Vec<&str>> for DateList {
    fn from(dates: Vec<&str>) -> Self {
        Self(dates.into_iter().map(str::to_string).collect())
    }
}

fn parse_data_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATA_DATE_FORMAT).ok()
}

/// Map a picked calendar date to its index in `dates`.
///
/// A date that is not in the list selects the latest available date instead.
/// Returns `None` only when the list is empty.
pub fn resolve_index_for_date(candidate: NaiveDate, dates: &DateList) -> Option<usize> {
    let key = format_date_to_data(candidate);
    match dates.position(&key) {
        Some(index) => Some(index),
        None => clamp_to_latest(dates),
    }
}

/// Unmatched dates fall back to the most recent entry. This silently changes
/// the user's selection and is not reported as an error.
fn clamp_to_latest(dates: &DateList) -> Option<usize> {
    dates.latest_index()
}

/// Coerce the raw value of the range input to an index.
///
/// Bounds are not checked here, the slider itself is limited to `0..=len-1`.
pub fn resolve_index_for_slider_value(raw: &str) -> DashboardResult<usize> {
    let trimmed = raw.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        return Ok(index);
    }
    match trimmed.parse::<f64>() {
        // `as` would saturate anything past usize::MAX
        Ok(value) if value.is_finite() && value >= 0.0 && value < usize::MAX as f64 => {
            Ok(value.trunc() as usize)
        }
        _ => Err(DashboardError::InvalidSliderValue(raw.to_string())),
    }
}

/// Parse the value of the native date input, which is always `YYYY-MM-DD`
/// (or empty once cleared).
pub fn parse_date_input(raw: &str) -> DashboardResult<NaiveDate> {
    parse_data_date(raw.trim()).ok_or_else(|| DashboardError::InvalidDate(raw.to_string()))
}

/// Indices that get a label under the slider: first, middle and last.
///
/// The middle position rounds down when the list has an even length.
pub fn slider_label_ticks(len: usize) -> Vec<usize> {
    let Some(last) = len.checked_sub(1) else {
        return Vec::new();
    };
    let mut ticks = vec![0, last / 2, last];
    ticks.dedup();
    ticks
}

/// Horizontal position of a slider label in percent of the track width
pub fn slider_label_position(index: usize, len: usize) -> f64 {
    match len.checked_sub(1) {
        Some(last) if last > 0 => index.min(last) as f64 * 100.0 / last as f64,
        _ => 0.0,
    }
}

/// Serde adapter for the selected index: `-1` or `null` mean no selection.
pub mod selected_index {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(index) => serializer.serialize_i64(*index as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<i64> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|i| usize::try_from(i).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_dates() -> DateList {
        DateList::from(vec!["2020-03-01", "2020-03-02", "2020-03-03"])
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_present_date_returns_its_position() {
        let dates = march_dates();
        assert_eq!(resolve_index_for_date(ymd(2020, 3, 1), &dates), Some(0));
        assert_eq!(resolve_index_for_date(ymd(2020, 3, 2), &dates), Some(1));
        assert_eq!(resolve_index_for_date(ymd(2020, 3, 3), &dates), Some(2));
    }

    #[test]
    fn test_resolve_absent_date_clamps_to_latest() {
        let dates = march_dates();
        assert_eq!(resolve_index_for_date(ymd(2099, 1, 1), &dates), Some(2));
        // before the first entry still selects the latest, not the earliest
        assert_eq!(resolve_index_for_date(ymd(2019, 12, 31), &dates), Some(2));
    }

    #[test]
    fn test_resolve_with_gap_in_dates() {
        let dates = DateList::from(vec!["2020-03-01", "2020-03-05", "2020-03-09"]);
        assert_eq!(resolve_index_for_date(ymd(2020, 3, 5), &dates), Some(1));
        assert_eq!(resolve_index_for_date(ymd(2020, 3, 4), &dates), Some(2));
    }

    #[test]
    fn test_resolve_on_empty_list() {
        assert_eq!(resolve_index_for_date(ymd(2020, 3, 1), &DateList::default()), None);
    }

    #[test]
    fn test_slider_value_passes_through() {
        let dates = march_dates();
        for n in 0..dates.len() {
            assert_eq!(resolve_index_for_slider_value(&n.to_string()), Ok(n));
        }
        assert_eq!(resolve_index_for_slider_value(" 7 "), Ok(7));
        assert_eq!(resolve_index_for_slider_value("2.0"), Ok(2));
        assert_eq!(resolve_index_for_slider_value("2.9"), Ok(2));
    }

    #[test]
    fn test_slider_value_rejects_garbage() {
        assert_eq!(
            resolve_index_for_slider_value("abc"),
            Err(DashboardError::InvalidSliderValue("abc".to_string()))
        );
        assert!(resolve_index_for_slider_value("-1").is_err());
        assert!(resolve_index_for_slider_value("NaN").is_err());
        assert!(resolve_index_for_slider_value("").is_err());
        assert_eq!(
            resolve_index_for_slider_value("1e30"),
            Err(DashboardError::InvalidSliderValue("1e30".to_string()))
        );
        assert!(resolve_index_for_slider_value("inf").is_err());
    }

    #[test]
    fn test_date_bounds() {
        let dates = march_dates();
        assert_eq!(dates.min_date(), Some(ymd(2020, 3, 1)));
        assert_eq!(dates.max_date(), Some(ymd(2020, 3, 3)));
        assert_eq!(dates.date_at(1), Some(ymd(2020, 3, 2)));
        assert_eq!(dates.date_at(3), None);
        assert_eq!(DateList::default().min_date(), None);
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2020-03-05"), Ok(ymd(2020, 3, 5)));
        assert_eq!(parse_date_input(" 2020-03-05 "), Ok(ymd(2020, 3, 5)));
        assert_eq!(
            parse_date_input("2020-02-31"),
            Err(DashboardError::InvalidDate("2020-02-31".to_string()))
        );
        assert!(parse_date_input("05/03/2020").is_err());
        assert!(parse_date_input("").is_err());
    }

    #[test]
    fn test_slider_label_ticks() {
        assert_eq!(slider_label_ticks(0), Vec::<usize>::new());
        assert_eq!(slider_label_ticks(1), vec![0]);
        assert_eq!(slider_label_ticks(2), vec![0, 1]);
        assert_eq!(slider_label_ticks(3), vec![0, 1, 2]);
        assert_eq!(slider_label_ticks(4), vec![0, 1, 3]);
        assert_eq!(slider_label_ticks(61), vec![0, 30, 60]);
    }

    #[test]
    fn test_slider_label_position() {
        assert_eq!(slider_label_position(0, 5), 0.0);
        assert_eq!(slider_label_position(2, 5), 50.0);
        assert_eq!(slider_label_position(4, 5), 100.0);
        assert_eq!(slider_label_position(0, 1), 0.0);
        assert_eq!(slider_label_position(9, 5), 100.0);
    }

    #[test]
    fn test_date_list_deserializes_from_array() {
        let dates: DateList = serde_json::from_str(r#"["2020-03-01","2020-03-02"]"#).unwrap();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates.position("2020-03-02"), Some(1));
    }
}
