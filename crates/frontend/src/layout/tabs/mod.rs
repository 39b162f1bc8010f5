pub mod country_select;
pub mod date_selector;
pub mod tabs;

pub use tabs::Tabs;
