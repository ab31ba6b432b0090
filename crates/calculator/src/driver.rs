//! Calculator driver - the presentation-layer seam
//!
//! A presentation layer forwards raw key identifiers and re-reads the display
//! after every key. [`Session`] is the standard driver: it owns one engine,
//! records a transcript and, unless strict, swallows rejected keys the way a
//! keypad would.

use tracing::{debug, warn};

use crate::core::{Action, CalcError, CalcResult, CalculatorEngine, EngineSnapshot};
use crate::transcript::{Transcript, TranscriptEntry};

/// Abstract driver for calculator interactions
///
/// The `verify_*` functions in this module are written against this trait
/// and run unchanged against any implementation.
pub trait CalculatorDriver {
    /// Presses one key identified by its raw name
    fn press_key(&mut self, key: &str) -> CalcResult<()>;

    /// Gets the current display
    fn display(&self) -> String;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Presses several keys in order, stopping at the first error
    fn press_keys(&mut self, keys: &[&str]) -> CalcResult<()> {
        for key in keys {
            self.press_key(key)?;
        }
        Ok(())
    }
}

/// Session behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Propagate rejected keys instead of ignoring them
    pub strict: bool,
    /// Maximum number of transcript entries kept
    pub transcript_capacity: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            strict: false,
            transcript_capacity: Transcript::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl SessionOptions {
    /// Set strict mode
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set transcript capacity
    #[must_use]
    pub const fn with_transcript_capacity(mut self, capacity: usize) -> Self {
        self.transcript_capacity = capacity;
        self
    }
}

/// One calculator window's worth of state
#[derive(Debug, Clone)]
pub struct Session {
    engine: CalculatorEngine,
    transcript: Transcript,
    options: SessionOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a lenient session
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Creates a session with explicit options
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            transcript: Transcript::with_capacity(options.transcript_capacity),
            options,
        }
    }

    /// Returns the session options
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the underlying engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the transcript
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns a serializable copy of the engine state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        self.engine.snapshot()
    }

    /// Presses an already-parsed action
    pub fn press(&mut self, action: Action) -> CalcResult<()> {
        let key = action.key();
        match self.engine.press(action) {
            Ok(()) => {
                self.record_applied(key);
                Ok(())
            }
            Err(err) => self.reject(key, err),
        }
    }

    /// Drives the inverted-mode toggle control directly
    pub fn set_inverted(&mut self, inverted: bool) {
        self.engine.set_inverted(inverted);
        self.record_applied(Action::SetInverted(inverted).key());
    }

    fn record_applied(&mut self, key: String) {
        self.transcript
            .push(TranscriptEntry::applied(key, self.engine.current_display()));
    }

    fn reject(&mut self, key: String, err: CalcError) -> CalcResult<()> {
        if self.options.strict {
            warn!(%key, %err, "key rejected");
            return Err(err);
        }
        debug!(%key, %err, "key ignored");
        let display = self.engine.current_display().to_string();
        self.transcript
            .push(TranscriptEntry::ignored(key, display, err.to_string()));
        Ok(())
    }
}

impl CalculatorDriver for Session {
    fn press_key(&mut self, key: &str) -> CalcResult<()> {
        match Action::from_key(key) {
            Ok(action) => match self.engine.press(action) {
                Ok(()) => {
                    self.record_applied(key.to_string());
                    Ok(())
                }
                Err(err) => self.reject(key.to_string(), err),
            },
            Err(err) => self.reject(key.to_string(), err),
        }
    }

    fn display(&self) -> String {
        self.engine.current_display().to_string()
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.transcript.clear();
    }
}

// ===== Driver-agnostic checks =====
// These run against ANY CalculatorDriver implementation

fn expect_display<D: CalculatorDriver>(driver: &D, expected: &str) -> CalcResult<()> {
    let actual = driver.display();
    if actual == expected {
        Ok(())
    } else {
        Err(CalcError::invalid_state(format!(
            "expected display '{expected}', found '{actual}'"
        )))
    }
}

/// Verifies digit entry and leading-zero suppression
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys(&["0", "0"])?;
    expect_display(driver, "0")?;
    driver.press_keys(&["1", "0", "2"])?;
    expect_display(driver, "102")?;
    driver.reset();
    Ok(())
}

/// Verifies left-to-right chaining of binary operators
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys(&["3", "+", "4", "="])?;
    expect_display(driver, "7")?;
    driver.reset();
    driver.press_keys(&["3", "+", "4", "×", "2", "="])?;
    expect_display(driver, "14")?;
    driver.reset();
    Ok(())
}

/// Verifies that inverted mode swaps operators for their inverses
pub fn verify_inversion<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys(&["2", "x^n", "1", "0", "="])?;
    expect_display(driver, "1024")?;
    driver.press_keys(&["inv", "x^n", "2", "="])?;
    expect_display(driver, "32")?;
    driver.press_keys(&["clr", "2", "inv", "log"])?;
    expect_display(driver, "100")?;
    driver.reset();
    Ok(())
}

/// Verifies the operand stack
pub fn verify_stack<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys(&["4", "2", "push", "clr", "7", "pop"])?;
    expect_display(driver, "42")?;
    driver.press_keys(&["pop"])?;
    expect_display(driver, "42")?;
    driver.reset();
    Ok(())
}

/// Verifies sign toggling
pub fn verify_sign<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys(&["+/-"])?;
    expect_display(driver, "0")?;
    driver.press_keys(&["5", "+/-"])?;
    expect_display(driver, "-5")?;
    driver.press_keys(&["+/-"])?;
    expect_display(driver, "5")?;
    driver.reset();
    Ok(())
}

/// Runs every driver-agnostic check
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_chaining(driver)?;
    verify_inversion(driver)?;
    verify_stack(driver)?;
    verify_sign(driver)
}
