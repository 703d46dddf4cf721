use std::fmt;

use payee_core::calculations::common::round_half_up;
use payee_core::{BASE_AMOUNT, TaxAssessment, TaxPayee};
use rust_decimal::Decimal;

/// Formats a decimal to exactly two places for console display.
fn two_dp(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Console summary of a payee and their assessment.
///
/// Eligible payees get a `--- Tax Details ---` header; ineligible payees get
/// a line explaining that the income is at or below the base amount. Both
/// variants are followed by the same four-field summary, with all amounts
/// rendered to two decimal places.
#[derive(Debug)]
pub struct TaxReport<'a> {
    payee: &'a TaxPayee,
    assessment: &'a TaxAssessment,
}

impl<'a> TaxReport<'a> {
    pub fn new(
        payee: &'a TaxPayee,
        assessment: &'a TaxAssessment,
    ) -> Self {
        Self { payee, assessment }
    }
}

impl fmt::Display for TaxReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f)?;
        if self.assessment.eligible {
            writeln!(f, "--- Tax Details ---")?;
        } else {
            writeln!(
                f,
                "Not eligible for tax (income <= base amount: {})",
                two_dp(BASE_AMOUNT)
            )?;
        }
        writeln!(f, "Name: {}", self.payee.name)?;
        writeln!(f, "Income: {}", two_dp(self.payee.income))?;
        writeln!(f, "Tax Percent: {}%", two_dp(self.payee.tax_percent))?;
        writeln!(f, "Tax Amount: {}", two_dp(self.assessment.tax_amount))
    }
}

#[cfg(test)]
mod tests {
    use payee_core::IncomeTaxWorksheet;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn render(
        income: Decimal,
        tax_percent: Decimal,
    ) -> String {
        let payee = TaxPayee::new("Ada", income, tax_percent);
        let assessment = IncomeTaxWorksheet::default().assess(&payee);
        TaxReport::new(&payee, &assessment).to_string()
    }

    #[test]
    fn eligible_report_shows_header_and_tax() {
        let report = render(dec!(60000), dec!(10));

        assert_eq!(
            report,
            "\n--- Tax Details ---\n\
             Name: Ada\n\
             Income: 60000.00\n\
             Tax Percent: 10.00%\n\
             Tax Amount: 1000.00\n"
        );
    }

    #[test]
    fn ineligible_report_explains_the_threshold() {
        let report = render(dec!(50000), dec!(25));

        assert_eq!(
            report,
            "\nNot eligible for tax (income <= base amount: 50000.00)\n\
             Name: Ada\n\
             Income: 50000.00\n\
             Tax Percent: 25.00%\n\
             Tax Amount: 0.00\n"
        );
    }

    #[test]
    fn zero_income_report_still_shows_all_fields() {
        let report = render(dec!(0), dec!(15));

        assert!(report.contains("Income: 0.00"));
        assert!(report.contains("Tax Percent: 15.00%"));
        assert!(report.contains("Tax Amount: 0.00"));
    }
}
