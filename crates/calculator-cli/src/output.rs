//! Result rendering

use console::Style;
use keypad_calculator::core::EngineSnapshot;
use keypad_calculator::driver::Session;
use keypad_calculator::transcript::{Outcome, TranscriptEntry};
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;

/// JSON document printed by `--format json`
#[derive(Debug, Serialize)]
pub struct SessionReport<'a> {
    /// Final display
    pub display: &'a str,
    /// Full engine state
    pub snapshot: EngineSnapshot,
    /// Keys pressed, oldest first
    pub transcript: Vec<&'a TranscriptEntry>,
    /// Number of keys that were ignored
    pub ignored: usize,
}

impl<'a> SessionReport<'a> {
    /// Builds a report from a finished session
    #[must_use]
    pub fn from_session(session: &'a Session) -> Self {
        Self {
            display: session.engine().current_display(),
            snapshot: session.snapshot(),
            transcript: session.transcript().iter().collect(),
            ignored: session.transcript().ignored_count(),
        }
    }
}

/// Formats session results for the terminal
#[derive(Debug, Clone)]
pub struct Printer {
    display: Style,
    dim: Style,
    warn: Style,
}

impl Printer {
    /// Creates a printer; styles are no-ops without color
    #[must_use]
    pub fn new(use_color: bool) -> Self {
        let base = Style::new().force_styling(use_color);
        Self {
            display: base.clone().bold(),
            dim: base.clone().dim(),
            warn: base.yellow(),
        }
    }

    /// Creates a printer honouring the configured color choice
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self::new(config.color.should_color())
    }

    /// Styles a display value
    #[must_use]
    pub fn display(&self, value: &str) -> String {
        self.display.apply_to(value).to_string()
    }

    /// One transcript line
    #[must_use]
    pub fn entry(&self, entry: &TranscriptEntry) -> String {
        let arrow = self.dim.apply_to("->");
        match &entry.outcome {
            Outcome::Applied => format!("{:>6} {arrow} {}", entry.key, entry.display),
            Outcome::Ignored { reason } => format!(
                "{:>6} {arrow} {} {}",
                entry.key,
                entry.display,
                self.warn.apply_to(format!("(ignored: {reason})"))
            ),
        }
    }

    /// Renders a finished session in the configured format
    pub fn report(&self, session: &Session, config: &CliConfig) -> CliResult<String> {
        match config.format {
            OutputFormat::Json => {
                let report = SessionReport::from_session(session);
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Text => {
                let mut lines: Vec<String> = Vec::new();
                if config.trace {
                    lines.extend(session.transcript().iter().map(|e| self.entry(e)));
                }
                lines.push(self.display(session.engine().current_display()));
                Ok(lines.join("\n"))
            }
        }
    }
}
