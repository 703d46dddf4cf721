use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single taxpayer as entered at the console.
///
/// All fields are fixed at construction; the tax owed is computed separately
/// by [`crate::calculations::IncomeTaxWorksheet::assess`] rather than stored
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPayee {
    pub name: String,

    /// Gross income for the period.
    pub income: Decimal,

    /// Tax rate as a whole-number percentage (10 means 10%).
    pub tax_percent: Decimal,
}

impl TaxPayee {
    pub fn new(
        name: impl Into<String>,
        income: Decimal,
        tax_percent: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            income,
            tax_percent,
        }
    }
}
