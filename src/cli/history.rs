use super::ui;
use crate::core::ConversionHistory;
use comfy_table::{Cell, Table};

/// Builds the history table, most recent first, with at most `limit` rows.
pub fn history_table(history: &ConversionHistory, raw_precision: usize, limit: usize) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Time"),
        ui::header_cell("Conversion"),
        ui::header_cell("Raw value"),
        ui::header_cell("Rounding"),
    ]);

    for entry in history.recent_first().take(limit) {
        let result = &entry.result;
        let direction = result.direction();
        let raw = ui::highlight_third_digit(&ui::format_raw(result.raw(), raw_precision));

        table.add_row(vec![
            Cell::new(entry.recorded_at.format("%H:%M:%S").to_string()),
            ui::amount_cell(format!(
                "{} {} → {} {}",
                ui::format_amount(result.input()),
                direction.source(),
                ui::format_amount(result.rounded()),
                direction.target()
            )),
            ui::amount_cell(format!("{raw} {}", direction.target())),
            Cell::new(result.explanation()),
        ]);
    }
    table
}

/// Renders the history title followed by the table, or a placeholder when
/// nothing has been converted yet.
pub fn render(history: &ConversionHistory, raw_precision: usize, limit: Option<usize>) -> String {
    let mut output = ui::style_text(
        &format!("Conversion history ({})", history.len()),
        ui::StyleType::Title,
    );

    if history.is_empty() {
        output.push('\n');
        output.push_str(&ui::style_text(
            "No entries in history",
            ui::StyleType::Subtle,
        ));
        return output;
    }

    let limit = limit.unwrap_or(usize::MAX);
    output.push('\n');
    output.push_str(&history_table(history, raw_precision, limit).to_string());

    let hidden = history.len().saturating_sub(limit);
    if hidden > 0 {
        output.push('\n');
        output.push_str(&ui::style_text(
            &format!("… {hidden} older entries not shown"),
            ui::StyleType::Subtle,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConversionDirection, convert};
    use console::strip_ansi_codes;

    // Rows must not wrap to whatever terminal runs the tests.
    fn table_text(history: &ConversionHistory, limit: usize) -> String {
        let mut table = history_table(history, 5, limit);
        table.force_no_tty();
        strip_ansi_codes(&table.to_string()).to_string()
    }

    #[test]
    fn test_empty_history() {
        let rendered = strip_ansi_codes(&render(&ConversionHistory::new(), 5, None)).to_string();
        assert!(rendered.contains("Conversion history (0)"));
        assert!(rendered.contains("No entries in history"));
    }

    #[test]
    fn test_history_lists_most_recent_first() {
        let mut history = ConversionHistory::new();
        history.push(convert(100.0, ConversionDirection::BgnToEur));
        history.push(convert(10.0, ConversionDirection::EurToBgn));

        let rendered = strip_ansi_codes(&render(&history, 5, None)).to_string();
        assert!(rendered.contains("Conversion history (2)"));

        let table = table_text(&history, usize::MAX);
        let newest = table.find("10.00 EUR → 19.56 BGN").expect("newest row");
        let oldest = table.find("100.00 BGN → 51.13 EUR").expect("oldest row");
        assert!(newest < oldest);
        assert!(table.contains("51.12919 EUR"));
    }

    #[test]
    fn test_history_limit_hides_older_rows() {
        let mut history = ConversionHistory::new();
        for amount in [1.0, 2.0, 3.0] {
            history.push(convert(amount, ConversionDirection::EurToBgn));
        }

        let rendered = strip_ansi_codes(&render(&history, 5, Some(2))).to_string();
        assert!(rendered.contains("Conversion history (3)"));
        assert!(rendered.contains("1 older entries not shown"));

        let table = table_text(&history, 2);
        assert!(table.contains("3.00 EUR"));
        assert!(!table.contains("1.00 EUR"));
    }

    #[test]
    fn test_history_shows_half_cent_input_rounded_up() {
        let mut history = ConversionHistory::new();
        history.push(convert(1.125, ConversionDirection::BgnToEur));

        assert!(table_text(&history, usize::MAX).contains("1.13 BGN → 0.58 EUR"));
    }
}
