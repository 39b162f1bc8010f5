//! Selection commands issued by the header and the bridge that produces them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{resolve_index_for_date, resolve_index_for_slider_value, DateList};
use crate::shared::error::DashboardResult;

/// Update request sent from the header to the state owner.
///
/// JSON: `{"kind":"setDateIndex","value":3}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SelectionCommand {
    SetDateIndex(usize),
    SetCountryId(String),
}

/// Turns widget events into [`SelectionCommand`]s.
///
/// Every handler dispatches at most one command and keeps no state.
#[derive(Clone, Copy)]
pub struct SelectionBridge<F> {
    dispatch: F,
}

impl<F> SelectionBridge<F>
where
    F: Fn(SelectionCommand),
{
    pub fn new(dispatch: F) -> Self {
        Self { dispatch }
    }

    /// Slider moved. Invalid raw values are returned as errors and nothing
    /// is dispatched.
    pub fn on_date_index_change(&self, raw: &str) -> DashboardResult<usize> {
        let index = resolve_index_for_slider_value(raw)?;
        (self.dispatch)(SelectionCommand::SetDateIndex(index));
        Ok(index)
    }

    /// Date picked in the date input. Dispatches the resolved index, or
    /// nothing when there are no dates at all.
    pub fn on_date_change(&self, date: NaiveDate, dates: &DateList) -> Option<usize> {
        let index = resolve_index_for_date(date, dates)?;
        (self.dispatch)(SelectionCommand::SetDateIndex(index));
        Some(index)
    }

    pub fn on_country_id_change(&self, id: impl Into<String>) {
        (self.dispatch)(SelectionCommand::SetCountryId(id.into()));
    }
}
