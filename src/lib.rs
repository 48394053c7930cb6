#![doc(test(attr(deny(warnings))))]

//! Budget Report turns one month of category budget/spend rows into a
//! variance report: over-budget and under-budget tables, spend-proportion
//! chart data, and optional free-text commentary.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod report;
pub mod sheets;
pub mod summary;
pub mod utils;
pub mod variance;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Report tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
