//! Flat income tax above a fixed base amount.
//!
//! A payee whose income is at or below the base amount owes nothing. Above
//! it, only the portion exceeding the base amount is taxed, at the payee's
//! whole-number percentage rate:
//!
//! ```text
//! taxable = income - base_amount
//! tax     = taxable * tax_percent / 100
//! ```
//!
//! The eligibility boundary is strict: an income exactly equal to the base
//! amount is not taxed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payee_core::{IncomeTaxWorksheet, TaxPayee};
//!
//! let worksheet = IncomeTaxWorksheet::default();
//! let payee = TaxPayee::new("Ada", dec!(60000.00), dec!(10));
//!
//! let assessment = worksheet.assess(&payee);
//!
//! assert!(assessment.eligible);
//! assert_eq!(assessment.taxable_income, dec!(10000.00));
//! assert_eq!(assessment.tax_amount, dec!(1000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::TaxPayee;

/// Fixed income threshold below or at which no tax applies (50 000).
pub const BASE_AMOUNT: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Errors that can occur when configuring the income tax worksheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxError {
    /// The base amount must be non-negative.
    #[error("base amount must be non-negative, got {0}")]
    InvalidBaseAmount(Decimal),
}

/// Configuration parameters for the income tax worksheet.
///
/// The default configuration uses the fixed [`BASE_AMOUNT`] threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxConfig {
    /// Income threshold below or at which no tax applies.
    pub base_amount: Decimal,
}

impl Default for IncomeTaxConfig {
    fn default() -> Self {
        Self {
            base_amount: BASE_AMOUNT,
        }
    }
}

impl IncomeTaxConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError::InvalidBaseAmount`] if `base_amount` is
    /// negative. The default configuration always validates.
    pub fn validate(&self) -> Result<(), IncomeTaxError> {
        if self.base_amount < Decimal::ZERO {
            return Err(IncomeTaxError::InvalidBaseAmount(self.base_amount));
        }
        Ok(())
    }
}

/// Result of assessing a payee against the worksheet.
///
/// An ineligible payee gets a zero assessment; the original inputs stay on
/// the [`TaxPayee`] itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Whether the income exceeded the base amount.
    pub eligible: bool,

    /// Income above the base amount; zero when not eligible.
    pub taxable_income: Decimal,

    /// Tax owed on the taxable income; zero when not eligible.
    pub tax_amount: Decimal,
}

impl TaxAssessment {
    /// Creates a zero-valued assessment for income at or below the base amount.
    fn not_eligible() -> Self {
        Self {
            eligible: false,
            taxable_income: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
        }
    }
}

/// Calculator for the flat income tax worksheet.
#[derive(Debug, Clone, Default)]
pub struct IncomeTaxWorksheet {
    config: IncomeTaxConfig,
}

impl IncomeTaxWorksheet {
    /// Creates a worksheet with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError`] if the configuration is invalid.
    pub fn new(config: IncomeTaxConfig) -> Result<Self, IncomeTaxError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns true iff `income` is strictly greater than the base amount.
    ///
    /// Pure, no side effects. Zero and negative incomes are not rejected;
    /// they simply fall on the ineligible side of the threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use payee_core::IncomeTaxWorksheet;
    ///
    /// let worksheet = IncomeTaxWorksheet::default();
    ///
    /// assert!(!worksheet.check_eligibility(dec!(50000.00)));
    /// assert!(worksheet.check_eligibility(dec!(50000.01)));
    /// ```
    pub fn check_eligibility(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.config.base_amount
    }

    /// Assesses a payee and returns the computed tax.
    ///
    /// If the payee is not eligible the assessment is all zeros. Otherwise
    /// the tax is `(income - base_amount) * tax_percent / 100`. Inputs are
    /// not validated; a negative rate flows through the same formula. The
    /// result is a pure function of the payee and configuration, so
    /// repeated assessment yields identical values.
    pub fn assess(
        &self,
        payee: &TaxPayee,
    ) -> TaxAssessment {
        if !self.check_eligibility(payee.income) {
            debug!(
                income = %payee.income,
                base = %self.config.base_amount,
                "income at or below base amount, no tax due"
            );
            return TaxAssessment::not_eligible();
        }

        let taxable_income = payee.income - self.config.base_amount;
        let tax_amount = taxable_income * payee.tax_percent / Decimal::ONE_HUNDRED;
        debug!(%taxable_income, %tax_amount, "assessed payee");

        TaxAssessment {
            eligible: true,
            taxable_income,
            tax_amount,
        }
    }
}
