//! Key runners behind the subcommands

use std::io::{BufRead, Write};

use keypad_calculator::driver::{CalculatorDriver, Session, SessionOptions};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use crate::output::Printer;

/// Splits a key script into keys
///
/// Keys are separated by whitespace; `#` comments out the rest of its line.
#[must_use]
pub fn tokenize_script(source: &str) -> Vec<String> {
    source
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(keys, _)| keys))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// Presses `keys` into a fresh session
///
/// In strict mode the first rejected key aborts the run.
pub fn run_keys<S: AsRef<str>>(keys: &[S], options: SessionOptions) -> CliResult<Session> {
    if keys.is_empty() {
        return Err(CliError::invalid_argument("no keys to press"));
    }
    let mut session = Session::with_options(options);
    for key in keys {
        let key = key.as_ref();
        session
            .press_key(key)
            .map_err(|err| CliError::key_rejected(key, err))?;
    }
    info!(
        keys = keys.len(),
        ignored = session.transcript().ignored_count(),
        display = session.engine().current_display(),
        "run finished"
    );
    Ok(session)
}

/// Interactive loop: each input line is a list of keys
///
/// Prints the display after every line. `quit` or `exit` ends the loop once
/// the keys before it on the same line are pressed; end of input also ends
/// it. Rejected keys in strict mode are reported on `err` and the session
/// carries on. Returns the number of lines processed.
pub fn run_repl<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    options: SessionOptions,
    printer: &Printer,
) -> CliResult<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut session = Session::with_options(options);
    let mut processed = 0;

    for line in input.lines() {
        let line = line?;
        let keys = tokenize_script(&line);
        let quit_at = keys.iter().position(|k| k == "quit" || k == "exit");
        let pressed = &keys[..quit_at.unwrap_or(keys.len())];
        if !pressed.is_empty() {
            for key in pressed {
                if let Err(e) = session.press_key(key) {
                    writeln!(err, "Error: {}", CliError::key_rejected(key.as_str(), e))?;
                    break;
                }
            }
            writeln!(out, "{}", printer.display(&session.display()))?;
            processed += 1;
        }
        if quit_at.is_some() {
            debug!("repl quit");
            break;
        }
    }

    out.flush()?;
    Ok(processed)
}
