//! Line-based host adapter: one message per input line, one outlet message
//! per output line.

use std::io::{BufRead, Write};

use chordstep_core::config::OutputFormat;
use chordstep_types::{Dispatcher, Emission, OutletValue, StepperEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMessage {
    Event(StepperEvent),
    Quit,
}

/// Parse one input line. Blank lines and `;` comments yield `Ok(None)`.
pub fn parse_message(line: &str) -> Result<Option<HostMessage>, String> {
    let msg = line.trim().trim_end_matches(';').trim();
    if msg.is_empty() || line.trim_start().starts_with(';') {
        return Ok(None);
    }
    let parsed = match msg.to_lowercase().as_str() {
        "bang" | "b" => HostMessage::Event(StepperEvent::Bang),
        "init" | "loadbang" => HostMessage::Event(StepperEvent::Init),
        "reset" => HostMessage::Event(StepperEvent::Reset),
        "quit" | "stop" => HostMessage::Quit,
        _ => return Err(format!("unknown message '{}'", msg)),
    };
    Ok(Some(parsed))
}

pub fn format_emission(emission: &Emission, format: OutputFormat) -> String {
    match format {
        OutputFormat::Max => {
            let values = match &emission.value {
                OutletValue::Row(row) => row
                    .to_flat()
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
                OutletValue::Count(n) => n.to_string(),
            };
            format!("out{} {}", emission.outlet, values)
        }
        OutputFormat::Json => serde_json::to_string(emission)
            .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e)),
    }
}

/// Feed every message from `input` to `dispatcher`, writing emissions to
/// `output` until end of input or a quit message. Returns the number of
/// events dispatched.
pub fn run_session<D, R, W>(
    dispatcher: &mut D,
    input: R,
    output: &mut W,
    format: OutputFormat,
    echo: bool,
) -> std::io::Result<usize>
where
    D: Dispatcher,
    R: BufRead,
    W: Write,
{
    let mut dispatched = 0;
    for line in input.lines() {
        let line = line?;
        let event = match parse_message(&line) {
            Ok(Some(HostMessage::Event(event))) => event,
            Ok(Some(HostMessage::Quit)) => {
                log::info!("quit received after {} events", dispatched);
                break;
            }
            Ok(None) => continue,
            Err(e) => {
                log::warn!("{}", e);
                eprintln!("{}", e);
                continue;
            }
        };
        if echo {
            writeln!(output, "> {}", event.name())?;
        }
        for emission in dispatcher.dispatch(event) {
            writeln!(output, "{}", format_emission(&emission, format))?;
        }
        output.flush()?;
        dispatched += 1;
    }
    Ok(dispatched)
}
