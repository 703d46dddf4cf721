pub mod calculations;
pub mod models;

pub use calculations::{
    BASE_AMOUNT, IncomeTaxConfig, IncomeTaxError, IncomeTaxWorksheet, TaxAssessment,
};
pub use models::*;
