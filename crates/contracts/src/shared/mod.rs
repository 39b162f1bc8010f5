pub mod configuration;
pub mod error;

pub use configuration::{Configuration, Features};
pub use error::{DashboardError, DashboardResult};
