use super::ui;
use crate::core::{ConversionDirection, convert, parse_amount};
use anyhow::{Context, Result};
use std::io::Write;

/// Converts a single amount given as text and writes the result to `out`.
///
/// Invalid amounts are reported, not treated as failures.
pub fn run(
    amount: &str,
    direction: ConversionDirection,
    json: bool,
    raw_precision: usize,
    out: &mut impl Write,
) -> Result<()> {
    let result = convert(parse_amount(amount), direction);

    if json {
        let rendered =
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        writeln!(out, "{rendered}")?;
    } else {
        writeln!(out, "{}", ui::style_text(&ui::rate_banner(), ui::StyleType::Subtle))?;
        writeln!(out, "{}", ui::render_result(&result, raw_precision))?;
    }
    Ok(())
}
