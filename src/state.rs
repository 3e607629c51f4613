/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Calculator state types.
//!
//! The state is a plain value type. Handlers never mutate it in place;
//! [crate::reduce] takes the old state and an [crate::Action] and returns the
//! next state. This keeps every transition trivially testable.

use std::fmt::{Display, Formatter};

/// A calculator operand.
///
/// An operand is fundamentally the text the user has typed so far (or the
/// text of a computed result). Encoding it as a tagged variant makes the two
/// non-numeric cases explicit, so malformed states like `"Error5"` cannot be
/// constructed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Nothing typed yet, or the field was cleared.
    #[default]
    Empty,
    /// A number under construction (or a finished result), as typed text.
    /// Contains at most one `'.'`; guaranteed by the reducer.
    Digits(String),
    /// The division-by-zero sentinel. Terminal display state, recoverable
    /// only via clear-all or delete-last (which acts as clear-all).
    Error,
}

impl Operand {
    pub fn is_empty(&self) -> bool { matches!(self, Self::Empty) }

    pub fn is_error(&self) -> bool { matches!(self, Self::Error) }

    /// The typed text, if this operand holds any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Digits(text) => Some(text),
            Self::Empty | Self::Error => None,
        }
    }

    /// Parse the operand as a number. Returns `None` for [Operand::Empty],
    /// [Operand::Error], and text that does not parse (eg a lone `"."`).
    /// Callers treat `None` as a silent no-op.
    pub fn parse(&self) -> Option<f64> {
        self.text()?.parse::<f64>().ok()
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Digits(text.to_string())
        }
    }
}

/// One of the four binary arithmetic operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Renders the display glyphs, not the ASCII input keys.
impl Display for ArithOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        };
        write!(f, "{glyph}")
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct State {
    /// The operand under construction, or the last computed result.
    pub current: Operand,
    /// The committed left operand of the pending operation.
    pub previous: Operand,
    /// The pending operation. `Some` iff `previous` is non-empty.
    pub op: Option<ArithOp>,
    /// Viewport clipping width. 0 means "do not clip".
    pub max_display_width: u16,
    /// Terminal row of the first viewport line. Set once by the event loop
    /// so that mouse coordinates can be mapped onto the keypad.
    pub origin_row: u16,
}

impl State {
    /// True when an operation has been chosen and awaits its right operand.
    pub fn has_pending_op(&self) -> bool {
        self.op.is_some() && !self.previous.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn operand_parses_typed_text() {
        assert_eq!(Operand::from("42").parse(), Some(42.0));
        assert_eq!(Operand::from("12.").parse(), Some(12.0));
        assert_eq!(Operand::from(".5").parse(), Some(0.5));
    }

    #[test]
    fn operand_silently_fails_to_parse() {
        assert_eq!(Operand::Empty.parse(), None);
        assert_eq!(Operand::Error.parse(), None);
        assert_eq!(Operand::from(".").parse(), None);
    }

    #[test]
    fn empty_text_is_the_empty_variant() {
        assert_eq!(Operand::from(""), Operand::Empty);
    }

    #[test]
    fn op_glyphs() {
        assert_eq!(ArithOp::Add.to_string(), "+");
        assert_eq!(ArithOp::Subtract.to_string(), "−");
        assert_eq!(ArithOp::Multiply.to_string(), "×");
        assert_eq!(ArithOp::Divide.to_string(), "÷");
    }

    #[test]
    fn pending_op_requires_both_fields() {
        let state = State::default();
        assert!(!state.has_pending_op());

        let state = State {
            previous: Operand::from("8"),
            op: Some(ArithOp::Subtract),
            ..Default::default()
        };
        assert!(state.has_pending_op());
    }
}
