use serde::{Deserialize, Serialize};

/// Runtime configuration served as `/config.json`.
///
/// Every key is optional; a missing `features` block or flag falls back to
/// the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub features: Features,
}

/// Feature toggles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
    /// Show dates as DD/MM/YYYY regardless of the runtime locale
    pub force_date_format_feature: bool,
}

impl Configuration {
    pub fn with_forced_date_format(force: bool) -> Self {
        Self {
            features: Features {
                force_date_format_feature: force,
            },
        }
    }
}
