//! Keypad Calculator - button-driven calculator backend
//!
//! A calculator whose only input is button presses: digits build up the
//! display, unary operators transform it, binary operators chain left to
//! right, an operand stack stores snapshots and an "inv" toggle swaps every
//! operator for its inverse.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.enter_digit(3).unwrap();
//! engine.apply_binary(BinaryOp::Add).unwrap();
//! engine.enter_digit(4).unwrap();
//! engine.apply_binary(BinaryOp::Multiply).unwrap();
//! engine.enter_digit(2).unwrap();
//! engine.resolve_binary().unwrap();
//! assert_eq!(engine.current_display(), "14");
//!
//! // A presentation layer forwards raw keys instead
//! let mut session = Session::new();
//! session.press_keys(&["8", "1", "inv", "x^n", "2", "="]).unwrap();
//! assert_eq!(session.display(), "9");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod transcript;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_number, Action, BinaryOp, CalcError, CalcResult, CalculatorEngine,
        EngineSnapshot, UnaryOp,
    };
    pub use crate::driver::{CalculatorDriver, Session, SessionOptions};
    pub use crate::keypad::{GridPosition, Keypad, KeypadButton};
    pub use crate::transcript::{Outcome, Transcript, TranscriptEntry};
}
