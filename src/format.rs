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

//! Display formatting for operands.
//!
//! Pure string to string functions. The integer part is grouped with the
//! fixed `en-IN` convention (the rightmost group has 3 digits, the rest have
//! 2: `1234567` reads `12,34,567`). The fractional part passes through
//! verbatim, including the in-progress case of a trailing `'.'` with no
//! digits typed after it yet.

use crate::{Operand, State};

/// The Error sentinel renders verbatim.
pub const ERROR_TEXT: &str = "Error";

/// Format one operand for display. Empty renders as the empty string; the
/// component substitutes `"0"` for it on the current line.
pub fn format_operand(operand: &Operand) -> String {
    match operand {
        Operand::Empty => String::new(),
        Operand::Error => ERROR_TEXT.to_string(),
        Operand::Digits(text) => format_number_text(text),
    }
}

/// The pending line: `"<formatted previous> <op glyph>"`, only when both the
/// previous operand and the operation are set. Otherwise empty.
pub fn format_pending(state: &State) -> String {
    match (&state.previous, state.op) {
        (previous, Some(op)) if !previous.is_empty() => {
            format!("{} {}", format_operand(previous), op)
        }
        _ => String::new(),
    }
}

fn format_number_text(text: &str) -> String {
    match text.split_once('.') {
        // Keep the dot even while the fractional part is still empty, so a
        // just-typed "12." renders as typed.
        Some((int_part, frac_part)) => {
            format!("{}.{}", group_integer_part(int_part), frac_part)
        }
        None => group_integer_part(text),
    }
}

/// Group an integer digit string en-IN style. An empty integer part reads as
/// `0` (typing ".5" shows "0.5"), leading zeros are normalized away, and a
/// leading minus sign is preserved outside the grouping.
fn group_integer_part(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return format!("{sign}0");
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let total = digits.len();
    for (i, ch) in digits.char_indices() {
        grouped.push(ch);
        let remaining = total - i - 1;
        let at_boundary = remaining > 0
            && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0));
        if at_boundary {
            grouped.push(',');
        }
    }

    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ArithOp;

    #[test]
    fn groups_with_the_en_in_convention() {
        assert_eq!(format_operand(&Operand::from("1234567")), "12,34,567");
        assert_eq!(format_operand(&Operand::from("1000")), "1,000");
        assert_eq!(format_operand(&Operand::from("100000")), "1,00,000");
        assert_eq!(format_operand(&Operand::from("123")), "123");
        assert_eq!(format_operand(&Operand::from("7")), "7");
    }

    #[test]
    fn fractional_part_passes_through_unformatted() {
        assert_eq!(format_operand(&Operand::from("12.5")), "12.5");
        assert_eq!(format_operand(&Operand::from("1234567.0001")), "12,34,567.0001");
    }

    #[test]
    fn trailing_decimal_point_still_renders() {
        assert_eq!(format_operand(&Operand::from("12.")), "12.");
    }

    #[test]
    fn empty_integer_part_reads_as_zero() {
        assert_eq!(format_operand(&Operand::from(".5")), "0.5");
    }

    #[test]
    fn leading_zeros_are_normalized() {
        assert_eq!(format_operand(&Operand::from("0005")), "5");
        assert_eq!(format_operand(&Operand::from("0")), "0");
    }

    #[test]
    fn negative_results_group_correctly() {
        assert_eq!(format_operand(&Operand::from("-1234567")), "-12,34,567");
        assert_eq!(format_operand(&Operand::from("-42.25")), "-42.25");
    }

    #[test]
    fn empty_and_error_render_verbatim() {
        assert_eq!(format_operand(&Operand::Empty), "");
        assert_eq!(format_operand(&Operand::Error), "Error");
    }

    #[test]
    fn pending_line_needs_both_operand_and_op() {
        let state = State {
            previous: Operand::from("8"),
            op: Some(ArithOp::Subtract),
            ..Default::default()
        };
        assert_eq!(format_pending(&state), "8 −");

        let state = State {
            previous: Operand::from("8"),
            op: None,
            ..Default::default()
        };
        assert_eq!(format_pending(&state), "");

        assert_eq!(format_pending(&State::default()), "");
    }
}
