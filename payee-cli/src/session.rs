use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use payee_core::{IncomeTaxWorksheet, TaxPayee};
use tracing::debug;

use crate::input::parse_decimal;
use crate::report::TaxReport;

/// Pre-supplied answers for the interactive prompts.
///
/// Any answer left as `None` is asked on the console instead; answers given
/// on the command line skip their prompt entirely.
#[derive(Debug, Default)]
pub struct Answers {
    pub name: Option<String>,
    pub income: Option<String>,
    pub tax_percent: Option<String>,
}

/// Runs one interactive tax session: prompt, assess, print the report.
///
/// Generic over the input and output streams so tests can drive it with
/// in-memory buffers. Prompts and the report share the same output stream,
/// matching the single-console interface.
///
/// # Errors
///
/// Fails fast on unreadable input, premature end of input, or a numeric
/// answer that does not parse. No recovery or re-prompting is attempted.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    answers: Answers,
) -> Result<()> {
    let name = match answers.name {
        Some(name) => name,
        None => prompt_line(input, output, "Enter name: ")?,
    };

    let income_raw = match answers.income {
        Some(raw) => raw,
        None => prompt_line(input, output, "Enter income amount: ")?,
    };
    let income = parse_decimal(&income_raw).context("reading income amount")?;

    let percent_raw = match answers.tax_percent {
        Some(raw) => raw,
        None => prompt_line(input, output, "Enter tax percent (e.g., 10 for 10%): ")?,
    };
    let tax_percent = parse_decimal(&percent_raw).context("reading tax percent")?;

    let payee = TaxPayee::new(name, income, tax_percent);
    let assessment = IncomeTaxWorksheet::default().assess(&payee);
    debug!(
        name = %payee.name,
        eligible = assessment.eligible,
        tax = %assessment.tax_amount,
        "session assessed"
    );

    write!(output, "{}", TaxReport::new(&payee, &assessment))?;
    Ok(())
}

/// Writes a prompt and reads one line, with the trailing newline stripped.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line).context("reading console input")?;
    if bytes_read == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
