use super::{history, ui};
use crate::core::config::AppConfig;
use crate::core::{ConversionDirection, Currency, Session};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Type an amount to convert it, or one of:
  bgn      convert from leva to euro
  eur      convert from euro to leva
  swap     switch the conversion direction
  history  show the conversions of this session
  clear    clear the history
  rate     show the official rate
  help     show this message
  quit     leave the calculator";

/// Whether the loop keeps reading input after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn prompt(direction: ConversionDirection) -> String {
    format!(
        "{} amount in {}> ",
        ui::style_text(&format!("[{direction}]"), ui::StyleType::Label),
        direction.source()
    )
}

fn show_direction(session: &Session, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Converting {}",
        ui::style_text(&session.direction().to_string(), ui::StyleType::Label)
    )?;
    Ok(())
}

/// Handles one line of user input.
pub fn handle_line(
    session: &mut Session,
    config: &AppConfig,
    line: &str,
    out: &mut impl Write,
) -> Result<Flow> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => {}
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        "help" | "?" => writeln!(out, "{HELP}")?,
        "rate" => writeln!(out, "{}", ui::rate_banner())?,
        "bgn" => {
            session.set_direction(ConversionDirection::from_source(Currency::Bgn));
            show_direction(session, out)?;
        }
        "eur" => {
            session.set_direction(ConversionDirection::from_source(Currency::Eur));
            show_direction(session, out)?;
        }
        "swap" => {
            session.swap_direction();
            show_direction(session, out)?;
        }
        "history" | "h" => writeln!(
            out,
            "{}",
            history::render(
                session.history(),
                config.raw_precision(),
                config.history_limit
            )
        )?,
        "clear" => {
            session.clear_history();
            writeln!(out, "History cleared")?;
        }
        _ => {
            session.set_amount(line);
            let result = session.submit();
            writeln!(out, "{}", ui::render_result(result, config.raw_precision()))?;
        }
    }
    Ok(Flow::Continue)
}

/// Runs the read-eval loop until `quit` or end of input. History lives only
/// as long as this call.
pub fn run(config: &AppConfig, mut input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut session = Session::new(config.default_direction);

    writeln!(
        out,
        "{}\n{}\n{}",
        ui::style_text("BGN ↔ EUR calculator", ui::StyleType::Title),
        ui::style_text(&ui::rate_banner(), ui::StyleType::Subtle),
        ui::style_text("Type 'help' for commands.", ui::StyleType::Subtle)
    )?;

    let mut line = String::new();
    loop {
        write!(out, "{}", prompt(session.direction()))?;
        out.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(out)?;
            break;
        }
        if handle_line(&mut session, config, &line, out)? == Flow::Quit {
            break;
        }
    }

    debug!(conversions = session.history().len(), "Session ended");
    Ok(())
}
