//! Operator tables
//!
//! Each operator is a pure function on `f64` paired with its declared inverse.
//! The inverse mapping is an exhaustive `match`, so a new operator cannot be
//! added without naming its inverse.

use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CalcError;

/// Operators that combine the pending operand with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷), unguarded
    Divide,
    /// Exponentiation (x^n)
    Power,
    /// n-th root, x^(1/n)
    Root,
}

impl BinaryOp {
    /// Every binary operator, primaries first
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Root,
    ];

    /// Applies the operator: `self(a, b)`
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Power => a.powf(b),
            Self::Root => a.powf(1.0 / b),
        }
    }

    /// Returns the operator applied in inverted mode
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Add => Self::Add,
            Self::Subtract => Self::Subtract,
            Self::Multiply => Self::Multiply,
            Self::Divide => Self::Divide,
            Self::Power => Self::Root,
            Self::Root => Self::Power,
        }
    }

    /// Returns true for operators that have their own keypad button
    #[must_use]
    pub const fn is_primary(self) -> bool {
        !matches!(self, Self::Root)
    }

    /// Token used by the presentation layer
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Root => "root",
        }
    }

    /// Button caption
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "x^n",
            Self::Root => "x^(1/n)",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for BinaryOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.token() == token)
            .ok_or_else(|| CalcError::invalid_argument(format!("unknown binary operator '{s}'")))
    }
}

/// Operators that replace the display with a function of itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Sine
    #[serde(rename = "sin")]
    Sin,
    /// Arcsine
    #[serde(rename = "asin")]
    Asin,
    /// Cosine
    #[serde(rename = "cos")]
    Cos,
    /// Arccosine
    #[serde(rename = "acos")]
    Acos,
    /// Tangent
    #[serde(rename = "tan")]
    Tan,
    /// Arctangent
    #[serde(rename = "atan")]
    Atan,
    /// Cotangent, 1/tan(x)
    #[serde(rename = "cot")]
    Cot,
    /// Arccotangent, atan(1/x)
    #[serde(rename = "acot")]
    Acot,
    /// Base-10 logarithm
    #[serde(rename = "log")]
    Log10,
    /// 10^x
    #[serde(rename = "exp10")]
    Exp10,
    /// Natural logarithm
    #[serde(rename = "ln")]
    Ln,
    /// e^x
    #[serde(rename = "exp")]
    Exp,
    /// 1/x
    #[serde(rename = "reciprocal")]
    Reciprocal,
}

impl UnaryOp {
    /// Every unary operator, primaries first
    pub const ALL: [Self; 13] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Cot,
        Self::Log10,
        Self::Ln,
        Self::Reciprocal,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Acot,
        Self::Exp10,
        Self::Exp,
    ];

    /// Applies the operator to `x`
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Asin => x.asin(),
            Self::Cos => x.cos(),
            Self::Acos => x.acos(),
            Self::Tan => x.tan(),
            Self::Atan => x.atan(),
            Self::Cot => 1.0 / x.tan(),
            Self::Acot => (1.0 / x).atan(),
            Self::Log10 => x.log10(),
            Self::Exp10 => 10f64.powf(x),
            Self::Ln => x.ln(),
            Self::Exp => E.powf(x),
            Self::Reciprocal => 1.0 / x,
        }
    }

    /// Returns the operator applied in inverted mode
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Sin => Self::Asin,
            Self::Asin => Self::Sin,
            Self::Cos => Self::Acos,
            Self::Acos => Self::Cos,
            Self::Tan => Self::Atan,
            Self::Atan => Self::Tan,
            Self::Cot => Self::Acot,
            Self::Acot => Self::Cot,
            Self::Log10 => Self::Exp10,
            Self::Exp10 => Self::Log10,
            Self::Ln => Self::Exp,
            Self::Exp => Self::Ln,
            Self::Reciprocal => Self::Reciprocal,
        }
    }

    /// Returns true for operators that have their own keypad button
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(
            self,
            Self::Sin
                | Self::Cos
                | Self::Tan
                | Self::Cot
                | Self::Log10
                | Self::Ln
                | Self::Reciprocal
        )
    }

    /// Token used by the presentation layer
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Asin => "asin",
            Self::Cos => "cos",
            Self::Acos => "acos",
            Self::Tan => "tan",
            Self::Atan => "atan",
            Self::Cot => "cot",
            Self::Acot => "acot",
            Self::Log10 => "log",
            Self::Exp10 => "exp10",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Reciprocal => "reciprocal",
        }
    }

    /// Button caption
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Asin => "arcsin",
            Self::Cos => "cos",
            Self::Acos => "arccos",
            Self::Tan => "tan",
            Self::Atan => "arctan",
            Self::Cot => "ctg",
            Self::Acot => "arcctg",
            Self::Log10 => "log",
            Self::Exp10 => "10^x",
            Self::Ln => "ln",
            Self::Exp => "e^x",
            Self::Reciprocal => "1/x",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for UnaryOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.token() == token)
            .ok_or_else(|| CalcError::invalid_argument(format!("unknown unary operator '{s}'")))
    }
}
