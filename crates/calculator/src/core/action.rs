//! Button actions
//!
//! Raw key identifiers from the presentation layer are mapped once to an
//! [`Action`]; the engine dispatches on the enum, never on strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{BinaryOp, CalcError, CalcResult, UnaryOp};

/// One logical calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    DecimalPoint,
    /// Sign toggle (+/-)
    ToggleSign,
    /// Unary operator button
    Unary(UnaryOp),
    /// Binary operator button
    Binary(BinaryOp),
    /// Evaluate the pending operation (=)
    Equals,
    /// Clear the display (clr)
    Clear,
    /// Reset everything (res)
    Reset,
    /// Push the display onto the stack
    Push,
    /// Pop the stack into the display
    Pop,
    /// Set inverted mode from a toggle control
    SetInverted(bool),
    /// Flip inverted mode (inv checkbox)
    ToggleInverted,
}

impl Action {
    /// Maps a raw key identifier to an action
    ///
    /// Accepts the keypad captions (`+`, `×`, `x^n`, `1/x`, `ctg`, `clr`, ...),
    /// their ASCII spellings, the operator tokens (`add`, `sin`, ...) and
    /// `inv-on`/`inv-off` for an explicit inverted-mode control.
    pub fn from_key(key: &str) -> CalcResult<Self> {
        let trimmed = key.trim();
        let lower = trimmed.to_lowercase();

        let action = match lower.as_str() {
            "." | "," => Self::DecimalPoint,
            "+/-" | "±" | "neg" => Self::ToggleSign,
            "=" | "equals" => Self::Equals,
            "clr" | "clear" => Self::Clear,
            "res" | "reset" => Self::Reset,
            "push" => Self::Push,
            "pop" => Self::Pop,
            "inv" => Self::ToggleInverted,
            "inv-on" => Self::SetInverted(true),
            "inv-off" => Self::SetInverted(false),
            "+" => Self::Binary(BinaryOp::Add),
            "-" => Self::Binary(BinaryOp::Subtract),
            "×" | "*" | "x" => Self::Binary(BinaryOp::Multiply),
            "÷" | "/" => Self::Binary(BinaryOp::Divide),
            "x^n" | "^" => Self::Binary(BinaryOp::Power),
            "1/x" | "1 / x" => Self::Unary(UnaryOp::Reciprocal),
            "ctg" => Self::Unary(UnaryOp::Cot),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_digit() => Self::Digit(ch as u8 - b'0'),
                    _ => other
                        .parse::<UnaryOp>()
                        .map(Self::Unary)
                        .or_else(|_| other.parse::<BinaryOp>().map(Self::Binary))
                        .map_err(|_| {
                            CalcError::invalid_argument(format!("unknown key '{trimmed}'"))
                        })?,
                }
            }
        };
        Ok(action)
    }

    /// Canonical key identifier; `Action::from_key(a.key())` yields `a`
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Unary(op) => op.token().to_string(),
            Self::Binary(op) => op.token().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "clr".to_string(),
            Self::Reset => "res".to_string(),
            Self::Push => "push".to_string(),
            Self::Pop => "pop".to_string(),
            Self::SetInverted(true) => "inv-on".to_string(),
            Self::SetInverted(false) => "inv-off".to_string(),
            Self::ToggleInverted => "inv".to_string(),
        }
    }

    /// Returns true for actions that can never fail
    #[must_use]
    pub const fn is_infallible(&self) -> bool {
        !matches!(
            self,
            Self::Digit(_) | Self::DecimalPoint | Self::Unary(_) | Self::Binary(_) | Self::Equals
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for Action {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}
