//! Types and pure logic shared by the dashboard frontend.

pub mod dashboard;
pub mod shared;
