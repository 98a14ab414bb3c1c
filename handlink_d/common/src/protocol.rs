//! The wire text format, both directions.
//!
//! Inbound (device → host), one line per report:
//!
//! ```text
//! B: <brightness> M: <mode-token> O: <r>,<y>,<g>
//! ```
//!
//! Outbound (host → device), one line per send cadence:
//!
//! ```text
//! <red>,<yellow>,<green>[,<mode-token>]\n
//! ```

use api::{ModeToken, Telemetry};

use crate::channels::ChannelBank;

/// Encode one outbound command line. The three channel values are always
/// present; the mode token is appended only when one is pending, with no
/// trailing comma otherwise.
pub fn encode_command_line(bank: &ChannelBank, token: Option<ModeToken>) -> String {
    let [red, yellow, green] = bank.snapshot();
    let mut line = format!("{},{},{}", red, yellow, green);
    if let Some(token) = token {
        line.push(',');
        line.push_str(token.as_str());
    }
    line.push('\n');
    line
}

/// Decode one inbound telemetry line (terminator already stripped) into
/// `state`. Returns `true` when the line matched and the state was updated.
///
/// Decoding is all-or-nothing at the line level: unless the `B:`/`M:`/`O:`
/// pattern matches from the start of the line, nothing changes. On a match,
/// the mode always updates, brightness updates when the digit run parses,
/// and the LED flags update only when the `O:` run holds exactly three
/// comma-separated integer fields. Trailing content is ignored.
pub fn decode_telemetry_line(line: &str, state: &mut Telemetry) -> bool {
    let line = line.trim();

    let Some(rest) = line.strip_prefix("B:") else {
        return false;
    };
    let rest = rest.trim_start();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return false;
    }

    let rest = rest[digits_end..].trim_start();
    let Some(rest) = rest.strip_prefix("M:") else {
        return false;
    };
    let rest = rest.trim_start();
    let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let token = &rest[..token_end];
    if token.is_empty() {
        return false;
    }

    let rest = rest[token_end..].trim_start();
    let Some(rest) = rest.strip_prefix("O:") else {
        return false;
    };
    let rest = rest.trim_start();
    let run_end = rest
        .find(|c: char| !c.is_ascii_digit() && c != ',')
        .unwrap_or(rest.len());
    let led_run = &rest[..run_end];
    if led_run.is_empty() {
        return false;
    }

    if let Ok(brightness) = digits.parse::<u32>() {
        state.brightness = brightness;
    }
    state.mode = token.to_string();

    let fields: Vec<&str> = led_run.split(',').collect();
    if fields.len() == 3 {
        let mut flags = [false; 3];
        let parsed = fields.iter().zip(flags.iter_mut()).all(|(field, flag)| {
            field.parse::<u32>().map(|v| *flag = v != 0).is_ok()
        });
        if parsed {
            state.led_on = flags;
        }
    }
    true
}
