//! Calculator keypad
//!
//! The button table of the calculator window: a 5x7 grid whose first row is
//! mostly taken by the display.
//!
//! ```text
//! [               display               ] [ = ] [clr ]
//! [1/x ] [sin ] [ 7 ] [ 8 ] [ 9 ] [ ÷ ] [res ]
//! [log ] [cos ] [ 4 ] [ 5 ] [ 6 ] [ × ] [push]
//! [ ln ] [tan ] [ 1 ] [ 2 ] [ 3 ] [ - ] [pop ]
//! [x^n ] [ctg ] [ 0 ] [+/-] [ . ] [ + ] [inv ]
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Action, BinaryOp, CalcError, CalcResult, UnaryOp};

/// Number of grid rows
pub const ROWS: u8 = 5;
/// Number of grid columns
pub const COLS: u8 = 7;
/// Number of columns the display spans in the first row
pub const DISPLAY_SPAN: u8 = 5;

const CELL_WIDTH: usize = 7;

/// A 1-based (row, column) position on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    row: u8,
    col: u8,
}

impl GridPosition {
    /// Position of the display
    pub const DISPLAY: Self = Self { row: 1, col: 1 };

    /// Creates a validated position
    ///
    /// Rows run 1..=5 and columns 1..=7; columns 2..=5 of the first row are
    /// covered by the display and cannot hold a button.
    pub fn new(row: u8, col: u8) -> CalcResult<Self> {
        if !(1..=ROWS).contains(&row) || !(1..=COLS).contains(&col) {
            return Err(CalcError::invalid_argument(format!(
                "position ({row}, {col}) is outside the {ROWS}x{COLS} grid"
            )));
        }
        if row == 1 && (2..=DISPLAY_SPAN).contains(&col) {
            return Err(CalcError::invalid_argument(format!(
                "position ({row}, {col}) is covered by the display"
            )));
        }
        Ok(Self { row, col })
    }

    /// Row, 1-based
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Column, 1-based
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: Action,
    /// Where the button sits
    pub position: GridPosition,
}

impl KeypadButton {
    const fn at(action: Action, row: u8, col: u8) -> Self {
        Self {
            action,
            position: GridPosition { row, col },
        }
    }

    /// Caption shown on the button; operators show their inverse when inverted
    #[must_use]
    pub fn caption(&self, inverted: bool) -> String {
        match self.action {
            Action::Unary(op) if inverted => op.inverse().label().to_string(),
            Action::Unary(op) => op.label().to_string(),
            Action::Binary(op) if inverted => op.inverse().label().to_string(),
            Action::Binary(op) => op.label().to_string(),
            Action::ToggleInverted if inverted => "inv*".to_string(),
            other => other.key(),
        }
    }
}

/// The calculator's button grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn standard() -> Self {
        use Action::{
            Binary, Clear, DecimalPoint, Digit, Equals, Pop, Push, Reset, ToggleInverted,
            ToggleSign, Unary,
        };

        let buttons = vec![
            // Row 1: display, = clr
            KeypadButton::at(Equals, 1, 6),
            KeypadButton::at(Clear, 1, 7),
            // Row 2: 1/x sin 7 8 9 ÷ res
            KeypadButton::at(Unary(UnaryOp::Reciprocal), 2, 1),
            KeypadButton::at(Unary(UnaryOp::Sin), 2, 2),
            KeypadButton::at(Digit(7), 2, 3),
            KeypadButton::at(Digit(8), 2, 4),
            KeypadButton::at(Digit(9), 2, 5),
            KeypadButton::at(Binary(BinaryOp::Divide), 2, 6),
            KeypadButton::at(Reset, 2, 7),
            // Row 3: log cos 4 5 6 × push
            KeypadButton::at(Unary(UnaryOp::Log10), 3, 1),
            KeypadButton::at(Unary(UnaryOp::Cos), 3, 2),
            KeypadButton::at(Digit(4), 3, 3),
            KeypadButton::at(Digit(5), 3, 4),
            KeypadButton::at(Digit(6), 3, 5),
            KeypadButton::at(Binary(BinaryOp::Multiply), 3, 6),
            KeypadButton::at(Push, 3, 7),
            // Row 4: ln tan 1 2 3 - pop
            KeypadButton::at(Unary(UnaryOp::Ln), 4, 1),
            KeypadButton::at(Unary(UnaryOp::Tan), 4, 2),
            KeypadButton::at(Digit(1), 4, 3),
            KeypadButton::at(Digit(2), 4, 4),
            KeypadButton::at(Digit(3), 4, 5),
            KeypadButton::at(Binary(BinaryOp::Subtract), 4, 6),
            KeypadButton::at(Pop, 4, 7),
            // Row 5: x^n ctg 0 +/- . + inv
            KeypadButton::at(Binary(BinaryOp::Power), 5, 1),
            KeypadButton::at(Unary(UnaryOp::Cot), 5, 2),
            KeypadButton::at(Digit(0), 5, 3),
            KeypadButton::at(ToggleSign, 5, 4),
            KeypadButton::at(DecimalPoint, 5, 5),
            KeypadButton::at(Binary(BinaryOp::Add), 5, 6),
            KeypadButton::at(ToggleInverted, 5, 7),
        ];

        Self { buttons }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (u8, u8) {
        (ROWS, COLS)
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns an iterator over all buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Gets the button at a position
    #[must_use]
    pub fn button_at(&self, position: GridPosition) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.position == position)
    }

    /// Finds the button a raw key identifier refers to
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&KeypadButton> {
        let action = Action::from_key(key).ok()?;
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Renders the keypad with `display` in the first row
    #[must_use]
    pub fn render(&self, display: &str, inverted: bool) -> String {
        let span = usize::from(DISPLAY_SPAN);
        let display_width = span * (CELL_WIDTH + 2) + (span - 1) - 2;

        let mut lines = Vec::with_capacity(usize::from(ROWS));
        for row in 1..=ROWS {
            let mut cells = Vec::with_capacity(usize::from(COLS));
            let mut col = 1;
            while col <= COLS {
                if row == GridPosition::DISPLAY.row && col == GridPosition::DISPLAY.col {
                    cells.push(format!("[{display:>display_width$}]"));
                    col += DISPLAY_SPAN;
                    continue;
                }
                let caption = GridPosition::new(row, col)
                    .ok()
                    .and_then(|pos| self.button_at(pos))
                    .map(|b| b.caption(inverted))
                    .unwrap_or_default();
                cells.push(format!("[{caption:^CELL_WIDTH$}]"));
                col += 1;
            }
            lines.push(cells.join(" "));
        }
        lines.join("\n")
    }
}
