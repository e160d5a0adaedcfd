use crate::core::{ConversionResult, FIXED_RATE};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Result,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Result => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Creates a right-aligned cell for an amount.
pub fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Formats an amount with two decimals, rounding exact halves away from zero.
///
/// `format!` rounds a value sitting exactly on a half cent (such as `1.125`)
/// to even; amounts typed by the user are shown rounded up instead.
pub fn format_amount(value: f64) -> String {
    // Only multiples of 1/8 that are not multiples of 1/4 land exactly on a
    // half cent in binary. Below 1e13, `value * 100` is still exact.
    let eighths = value * 8.0;
    let on_half_cent = value.abs() < 1e13 && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !on_half_cent {
        return format!("{value:.2}");
    }
    let cents = if value > 0.0 {
        (value * 100.0).ceil()
    } else {
        (value * 100.0).floor()
    };
    format!("{:.2}", cents / 100.0)
}

/// Formats `value` with `precision` decimals, dropping trailing zeros and a
/// dangling decimal point.
pub fn format_raw(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Bolds the third fractional digit of an already formatted number. Numbers
/// with fewer than three decimals are returned unchanged.
pub fn highlight_third_digit(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((whole, fraction)) if fraction.len() >= 3 => {
            let (before, rest) = fraction.split_at(2);
            let (third, after) = rest.split_at(1);
            format!("{whole}.{before}{}{after}", style(third).bold().underlined())
        }
        _ => formatted.to_string(),
    }
}

pub fn rate_banner() -> String {
    format!("Official rate: 1 EUR = {FIXED_RATE} BGN")
}

/// Renders one conversion result. Invalid results show only the explanation.
pub fn render_result(result: &ConversionResult, raw_precision: usize) -> String {
    if !result.is_valid() {
        return style_text(result.explanation(), StyleType::Error);
    }

    let direction = result.direction();
    let source = direction.source();
    let target = direction.target();
    let rounded = format!("{} {target}", format_amount(result.rounded()));
    let raw = highlight_third_digit(&format_raw(result.raw(), raw_precision));

    let mut output = format!(
        "{} {} {source} → {}\n",
        style_text("Result:", StyleType::Label),
        format_amount(result.input()),
        style_text(&rounded, StyleType::Result)
    );
    output.push_str(&format!(
        "{} {raw} {target}\n",
        style_text("Raw value:", StyleType::Label)
    ));
    output.push_str(&format!(
        "{} {}\n",
        style_text("Rounding:", StyleType::Label),
        result.explanation()
    ));
    output.push_str(&style_text(
        "Per Art. 13 of the Euro Introduction Act: the second decimal is raised by one \
         when the third decimal is 5 or more",
        StyleType::Subtle,
    ));
    output
}
