//! Calculator engine state machine
//!
//! Two orthogonal states drive every transition: whether a binary operator
//! is waiting for its right operand, and whether inverted mode is on.
//! Each action validates and computes first, then commits, so a failing
//! action leaves the state untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::format::{format_number, is_numeral, parse_number};
use crate::core::{Action, BinaryOp, CalcError, CalcResult, UnaryOp};

/// Display value of a fresh engine
pub const INITIAL_DISPLAY: &str = "0";

/// A captured left operand and the operator waiting for its right operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Left operand as it was displayed when the operator was pressed
    pub operand: String,
    /// Operator to apply, already resolved against inverted mode
    pub operator: BinaryOp,
}

/// Calculator backend: one instance per calculator window
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    pending: Option<PendingOperation>,
    stack: Vec<String>,
    inverted: bool,
    binary_pending: bool,
    decimal_entered: bool,
    /// Set when an operator was stored and the right operand is not started
    awaiting_operand: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine showing `0` with no pending work
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            stack: Vec::new(),
            inverted: false,
            binary_pending: false,
            decimal_entered: false,
            awaiting_operand: false,
        }
    }

    /// Returns the text the presentation layer should show
    #[must_use]
    pub fn current_display(&self) -> &str {
        &self.display
    }

    /// Returns true when operators apply their inverse
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Returns true while a binary operator waits for its right operand
    #[must_use]
    pub const fn is_binary_pending(&self) -> bool {
        self.binary_pending
    }

    /// Returns true once a decimal point was typed into the current number
    #[must_use]
    pub const fn is_decimal_entered(&self) -> bool {
        self.decimal_entered
    }

    /// Returns the captured left operand, if any
    #[must_use]
    pub fn pending_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    /// Returns the operator waiting for its right operand, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Returns the operand stack, bottom first
    #[must_use]
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// Returns the number of stacked operands
    #[must_use]
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Returns a serializable copy of the state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display.clone(),
            pending: self.pending.clone(),
            stack: self.stack.clone(),
            inverted: self.inverted,
            binary_pending: self.binary_pending,
            decimal_entered: self.decimal_entered,
        }
    }

    /// Dispatches one button press
    pub fn press(&mut self, action: Action) -> CalcResult<()> {
        trace!(?action, display = %self.display, "press");
        match action {
            Action::Digit(d) => self.enter_digit(d),
            Action::DecimalPoint => self.enter_decimal_point(),
            Action::ToggleSign => {
                self.toggle_sign();
                Ok(())
            }
            Action::Unary(op) => self.apply_unary(op),
            Action::Binary(op) => self.apply_binary(op),
            Action::Equals => self.resolve_binary(),
            Action::Clear => {
                self.clear();
                Ok(())
            }
            Action::Reset => {
                self.reset();
                Ok(())
            }
            Action::Push => {
                self.push();
                Ok(())
            }
            Action::Pop => {
                self.pop();
                Ok(())
            }
            Action::SetInverted(flag) => {
                self.set_inverted(flag);
                Ok(())
            }
            Action::ToggleInverted => {
                self.toggle_inverted();
                Ok(())
            }
        }
    }

    /// Appends a digit to the display
    ///
    /// The first digit after a binary operator starts the right operand
    /// instead of extending the left one.
    pub fn enter_digit(&mut self, digit: u8) -> CalcResult<()> {
        if digit > 9 {
            return Err(CalcError::invalid_argument(format!(
                "'{digit}' is not a decimal digit"
            )));
        }

        let fresh = self.awaiting_operand || !is_numeral(&self.display);
        if fresh {
            self.display = INITIAL_DISPLAY.to_string();
            self.awaiting_operand = false;
        }

        if self.display == INITIAL_DISPLAY {
            if digit != 0 {
                self.display = digit.to_string();
            }
        } else {
            self.display.push(char::from(b'0' + digit));
        }
        Ok(())
    }

    /// Appends a digit given as a character
    pub fn enter_digit_char(&mut self, ch: char) -> CalcResult<()> {
        let digit = ch
            .to_digit(10)
            .ok_or_else(|| CalcError::invalid_argument(format!("'{ch}' is not a decimal digit")))?;
        self.enter_digit(digit as u8)
    }

    /// Appends a decimal point
    pub fn enter_decimal_point(&mut self) -> CalcResult<()> {
        if self.awaiting_operand || !is_numeral(&self.display) {
            self.display = format!("{INITIAL_DISPLAY}.");
            self.awaiting_operand = false;
            self.decimal_entered = true;
            return Ok(());
        }

        if self.display.contains('.') {
            return Err(CalcError::invalid_state(
                "decimal point already entered",
            ));
        }

        self.display.push('.');
        self.decimal_entered = true;
        Ok(())
    }

    /// Flips the sign of the display; `0` stays `0`
    pub fn toggle_sign(&mut self) {
        if let Some(magnitude) = self.display.strip_prefix('-') {
            self.display = magnitude.to_string();
        } else if self.display != INITIAL_DISPLAY {
            self.display.insert(0, '-');
        }
    }

    /// Applies a unary operator (or its inverse) to the display
    ///
    /// A pending binary operation is resolved first.
    pub fn apply_unary(&mut self, op: UnaryOp) -> CalcResult<()> {
        let operand = match self.pending_result()? {
            Some(value) => value,
            None => parse_number(&self.display)?,
        };
        let op = if self.inverted { op.inverse() } else { op };
        let result = op.apply(operand);
        debug!(%op, operand, result, "unary");

        self.finish_pending();
        self.display = format_number(result);
        self.decimal_entered = false;
        Ok(())
    }

    /// Applies a unary operator named by its token
    pub fn apply_unary_token(&mut self, token: &str) -> CalcResult<()> {
        self.apply_unary(token.parse()?)
    }

    /// Stores the display as left operand of `op` (or its inverse)
    ///
    /// An operator already pending is resolved first, so `3 + 4 ×` is
    /// `(3 + 4) ×`.
    pub fn apply_binary(&mut self, op: BinaryOp) -> CalcResult<()> {
        if let Some(value) = self.pending_result()? {
            self.display = format_number(value);
        } else {
            parse_number(&self.display)?;
        }
        let operator = if self.inverted { op.inverse() } else { op };
        debug!(%operator, operand = %self.display, "binary pending");

        self.pending = Some(PendingOperation {
            operand: self.display.clone(),
            operator,
        });
        self.binary_pending = true;
        self.awaiting_operand = true;
        self.decimal_entered = false;
        Ok(())
    }

    /// Applies a binary operator named by its token
    pub fn apply_binary_token(&mut self, token: &str) -> CalcResult<()> {
        self.apply_binary(token.parse()?)
    }

    /// Evaluates the pending binary operation (the `=` button)
    ///
    /// Does nothing when no operator is pending.
    pub fn resolve_binary(&mut self) -> CalcResult<()> {
        if let Some(value) = self.pending_result()? {
            self.finish_pending();
            self.display = format_number(value);
            self.decimal_entered = false;
        }
        Ok(())
    }

    /// Pushes a copy of the display onto the operand stack
    pub fn push(&mut self) {
        trace!(value = %self.display, depth = self.stack.len() + 1, "push");
        self.stack.push(self.display.clone());
    }

    /// Replaces the display with the top of the stack; empty stack is a no-op
    pub fn pop(&mut self) {
        if let Some(value) = self.stack.pop() {
            trace!(%value, depth = self.stack.len(), "pop");
            self.decimal_entered = value.contains('.');
            self.display = value;
            self.awaiting_operand = false;
        }
    }

    /// Clears the display and leaves inverted mode
    ///
    /// Pending operations and the stack survive.
    pub fn clear(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.decimal_entered = false;
        self.inverted = false;
    }

    /// Clears everything, including the stack and any pending operation
    pub fn reset(&mut self) {
        debug!("reset");
        self.clear();
        self.stack.clear();
        self.finish_pending();
    }

    /// Sets inverted mode
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Flips inverted mode
    pub fn toggle_inverted(&mut self) {
        self.inverted = !self.inverted;
    }

    /// Computes the pending operation against the display without committing
    fn pending_result(&self) -> CalcResult<Option<f64>> {
        let Some(pending) = &self.pending else {
            return Ok(None);
        };
        let left = parse_number(&pending.operand)?;
        let right = parse_number(&self.display)?;
        let result = pending.operator.apply(left, right);
        debug!(operator = %pending.operator, left, right, result, "resolve");
        Ok(Some(result))
    }

    fn finish_pending(&mut self) {
        self.pending = None;
        self.binary_pending = false;
        self.awaiting_operand = false;
    }
}

/// Serializable view of the engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Current display text
    pub display: String,
    /// Pending binary operation, if any
    pub pending: Option<PendingOperation>,
    /// Operand stack, bottom first
    pub stack: Vec<String>,
    /// Inverted mode flag
    pub inverted: bool,
    /// A binary operator waits for its right operand
    pub binary_pending: bool,
    /// A decimal point was typed into the current number
    pub decimal_entered: bool,
}
