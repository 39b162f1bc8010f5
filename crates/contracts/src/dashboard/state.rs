use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::country::{CountryEntry, CountrySelectEntries};
use super::dates::{selected_index, DateList};
use super::selection::SelectionCommand;
use crate::shared::error::{DashboardError, DashboardResult};

/// Shared dashboard state read by the header, as served in `/data/dashboard.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardState {
    pub date_selector_enabled: bool,
    pub dates: DateList,
    #[serde(with = "selected_index")]
    pub selected_date_index: Option<usize>,
    pub country_selector_enabled: bool,
    pub selected_country_id: String,
    pub country_select_entries: CountrySelectEntries,
}

impl DashboardState {
    /// Drop a selected index that does not point into `dates`, as can happen
    /// with a hand-edited data document.
    pub fn normalize(mut self) -> Self {
        if self
            .selected_date_index
            .is_some_and(|index| index >= self.dates.len())
        {
            self.selected_date_index = None;
        }
        self
    }

    /// Check a command without applying it
    pub fn validate(&self, command: &SelectionCommand) -> DashboardResult<()> {
        match command {
            SelectionCommand::SetDateIndex(index) => {
                if *index >= self.dates.len() {
                    return Err(DashboardError::IndexOutOfRange {
                        index: *index,
                        len: self.dates.len(),
                    });
                }
            }
            SelectionCommand::SetCountryId(id) => {
                if !self.country_select_entries.contains(id) {
                    return Err(DashboardError::UnknownCountry(id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Apply a selection command. Rejected commands leave the state untouched.
    pub fn apply(&mut self, command: SelectionCommand) -> DashboardResult<()> {
        self.validate(&command)?;
        match command {
            SelectionCommand::SetDateIndex(index) => self.selected_date_index = Some(index),
            SelectionCommand::SetCountryId(id) => self.selected_country_id = id,
        }
        Ok(())
    }

    /// Date input and slider are only shown with a non-empty list and a
    /// selection that points into it.
    pub fn date_controls_visible(&self) -> bool {
        self.date_selector_enabled
            && self
                .selected_date_index
                .is_some_and(|index| index < self.dates.len())
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date_index
            .and_then(|index| self.dates.date_at(index))
    }

    pub fn selected_country(&self) -> Option<&CountryEntry> {
        self.country_select_entries.get(&self.selected_country_id)
    }
}
