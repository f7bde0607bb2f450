#![doc(test(attr(deny(warnings))))]

//! Finance Core computes the figures behind a personal-finance dashboard:
//! balances, a monthly income/expense series, top spending categories and
//! the order in which recurring expenses fall due.
//!
//! Every computation is a pure function of an in-memory [`domain::Snapshot`]
//! and an explicitly supplied date.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{Clock, Dashboard, DashboardView, FixedClock, SystemClock};
pub use crate::errors::{FinanceError, Result, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
