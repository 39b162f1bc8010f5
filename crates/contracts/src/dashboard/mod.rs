pub mod country;
pub mod dates;
pub mod display;
pub mod navigation;
pub mod selection;
pub mod state;

pub use country::{CountryEntry, CountryMenuItem, CountrySelectEntries};
pub use dates::{resolve_index_for_date, resolve_index_for_slider_value, DateList};
pub use display::{format_date_to_data, format_for_display};
pub use navigation::NavTab;
pub use selection::{SelectionBridge, SelectionCommand};
pub use state::DashboardState;
