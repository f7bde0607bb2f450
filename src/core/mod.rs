//! Computation layer: pure services over a [`crate::domain::Snapshot`] and
//! the dashboard that composes them.

pub mod dashboard;
pub mod services;
pub mod time;

pub use dashboard::{Dashboard, DashboardView};
pub use time::{Clock, FixedClock, SystemClock};
