use serde::{Deserialize, Serialize};

/// Вкладки шапки дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTab {
    Cases,
    Mobility,
    Capacity,
    Symptoms,
}

impl NavTab {
    /// Tabs in header order
    pub fn all() -> [NavTab; 4] {
        [
            NavTab::Cases,
            NavTab::Mobility,
            NavTab::Capacity,
            NavTab::Symptoms,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Cases => "Confirmed Cases",
            NavTab::Mobility => "Mobility",
            NavTab::Capacity => "Capacity",
            NavTab::Symptoms => "Symptoms",
        }
    }

    /// Route segment of the view. `Symptoms` has no view and is shown as
    /// plain text.
    pub fn path_segment(&self) -> Option<&'static str> {
        match self {
            NavTab::Cases => Some("cases"),
            NavTab::Mobility => Some("mobility"),
            NavTab::Capacity => Some("capacity"),
            NavTab::Symptoms => None,
        }
    }

    /// Link target for a dataset `code`: `/{code}/{segment}`
    pub fn href(&self, code: &str) -> Option<String> {
        self.path_segment()
            .map(|segment| format!("/{}/{}", code, segment))
    }
}
