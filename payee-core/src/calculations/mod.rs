//! Tax calculation modules.
//!
//! This module holds the income tax worksheet and the shared numeric helpers
//! it relies on.

pub mod common;
pub mod income_tax;

pub use income_tax::{
    BASE_AMOUNT, IncomeTaxConfig, IncomeTaxError, IncomeTaxWorksheet, TaxAssessment,
};
