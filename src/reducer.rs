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

//! The calculator reducer.
//!
//! [reduce] is the only piece of logic in the crate that changes calculator
//! fields. It is a pure function over [State]; the event loop owns the single
//! mutable copy and replaces it wholesale after each input event.
//!
//! Failure semantics are deliberately silent: a second decimal point is
//! dropped, and compute with an unparseable operand is a no-op. The only
//! user-visible failure is division by zero, which produces the
//! [Operand::Error] sentinel.

use crate::{ArithOp, Operand, State};

/// Number of decimal places a computed result is rounded to.
const RESULT_DECIMAL_PLACES: i32 = 8;

/// Everything the calculator can be asked to do. Keyboard keys and keypad
/// clicks both resolve to one of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append one of `'0'..='9'` or `'.'` to the current operand.
    InsertDigit(char),
    ChooseOperation(ArithOp),
    Compute,
    DeleteLast,
    ClearAll,
}

/// Apply one action to the state and return the next state.
pub fn reduce(state: &State, action: Action) -> State {
    match action {
        Action::InsertDigit(ch) => insert_digit(state, ch),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Compute => compute(state),
        Action::DeleteLast => delete_last(state),
        Action::ClearAll => clear_all(state),
    }
}

/// Append a digit or decimal point to the current operand. A second `'.'` is
/// silently dropped. While the Error sentinel is shown, entry is a no-op
/// (the sentinel is only recoverable via clear or delete).
fn insert_digit(state: &State, ch: char) -> State {
    if !(ch.is_ascii_digit() || ch == '.') {
        return state.clone();
    }

    let text = match &state.current {
        Operand::Error => return state.clone(),
        Operand::Empty => "",
        Operand::Digits(text) => text,
    };

    if ch == '.' && text.contains('.') {
        return state.clone();
    }

    let mut next_text = text.to_string();
    next_text.push(ch);

    State {
        current: Operand::Digits(next_text),
        ..state.clone()
    }
}

/// Commit the current operand as the left side of `op`. If an operation is
/// already pending, it is collapsed via [compute] first, so only one
/// operation is ever pending.
fn choose_operation(state: &State, op: ArithOp) -> State {
    if state.current.is_empty() || state.current.is_error() {
        return state.clone();
    }

    let collapsed = if !state.previous.is_empty() {
        let it = compute(state);
        // Division by zero during the chain. Stop here, the sentinel must
        // not leak into the previous operand.
        if it.current.is_error() {
            return it;
        }
        it
    } else {
        state.clone()
    };

    State {
        op: Some(op),
        previous: collapsed.current.clone(),
        current: Operand::Empty,
        ..collapsed
    }
}

/// Collapse the pending operation. Silent no-op when there is no pending
/// operation or either operand fails to parse. On success both the previous
/// operand and the operation reset, so pressing compute again is idempotent.
fn compute(state: &State) -> State {
    let (Some(prev), Some(curr)) = (state.previous.parse(), state.current.parse()) else {
        return state.clone();
    };
    let Some(op) = state.op else {
        return state.clone();
    };

    if op == ArithOp::Divide && curr == 0.0 {
        return State {
            current: Operand::Error,
            previous: Operand::Empty,
            op: None,
            ..state.clone()
        };
    }

    let result = op.apply(prev, curr);

    // Overflow to infinity has nowhere sensible to go on the display either.
    if !result.is_finite() {
        return State {
            current: Operand::Error,
            previous: Operand::Empty,
            op: None,
            ..state.clone()
        };
    }

    State {
        current: Operand::Digits(format_result(round_result(result))),
        previous: Operand::Empty,
        op: None,
        ..state.clone()
    }
}

/// Remove the last typed character. On the Error sentinel this is a full
/// clear.
fn delete_last(state: &State) -> State {
    match &state.current {
        Operand::Error => clear_all(state),
        Operand::Empty => state.clone(),
        Operand::Digits(text) => {
            let mut next_text = text.clone();
            next_text.pop();
            State {
                current: Operand::from(next_text.as_str()),
                ..state.clone()
            }
        }
    }
}

/// Reset all three calculator fields unconditionally.
fn clear_all(state: &State) -> State {
    State {
        current: Operand::Empty,
        previous: Operand::Empty,
        op: None,
        ..state.clone()
    }
}

/// Round to [RESULT_DECIMAL_PLACES] decimal places, half up. The tiny epsilon
/// added first absorbs binary floating point representation drift, so that
/// eg `1.1 + 2.2` lands on `3.3` instead of `3.3000000000000003`.
fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(RESULT_DECIMAL_PLACES);
    ((value + f64::EPSILON) * scale).round() / scale
}

/// Shortest round-trip text for a result. Whole numbers print without a
/// trailing `.0`, matching the typed-text representation of operands.
fn format_result(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply_all(actions: &[Action]) -> State {
        actions
            .iter()
            .fold(State::default(), |state, &action| reduce(&state, action))
    }

    fn digits(text: &str) -> Vec<Action> {
        text.chars().map(Action::InsertDigit).collect()
    }

    #[test]
    fn digit_entry_concatenates_literally() {
        let state = apply_all(&digits("120.5"));
        assert_eq!(state.current, Operand::from("120.5"));
    }

    #[test]
    fn second_decimal_point_is_dropped() {
        let state = apply_all(&digits("1.2.3"));
        assert_eq!(state.current, Operand::from("1.23"));
    }

    #[test]
    fn non_digit_characters_are_dropped() {
        let state = apply_all(&[Action::InsertDigit('x'), Action::InsertDigit('5')]);
        assert_eq!(state.current, Operand::from("5"));
    }

    #[test]
    fn epsilon_rounding_absorbs_float_drift() {
        let mut actions = digits("1.1");
        actions.push(Action::ChooseOperation(ArithOp::Add));
        actions.extend(digits("2.2"));
        actions.push(Action::Compute);

        let state = apply_all(&actions);
        assert_eq!(state.current, Operand::from("3.3"));
        assert_eq!(state.previous, Operand::Empty);
        assert_eq!(state.op, None);
    }

    #[test]
    fn compute_is_idempotent_after_success() {
        let mut actions = digits("6");
        actions.push(Action::ChooseOperation(ArithOp::Multiply));
        actions.extend(digits("7"));
        actions.push(Action::Compute);
        actions.push(Action::Compute);

        let state = apply_all(&actions);
        assert_eq!(state.current, Operand::from("42"));
    }

    #[test]
    fn compute_without_pending_operation_is_a_noop() {
        let before = apply_all(&digits("9"));
        let after = reduce(&before, Action::Compute);
        assert_eq!(before, after);
    }

    #[test]
    fn compute_with_unparseable_operand_is_a_noop() {
        // A lone "." does not parse, so nothing happens.
        let mut actions = digits("4");
        actions.push(Action::ChooseOperation(ArithOp::Add));
        actions.push(Action::InsertDigit('.'));
        let before = apply_all(&actions);

        let after = reduce(&before, Action::Compute);
        assert_eq!(before, after);
    }

    #[test]
    fn division_by_zero_sets_the_error_sentinel() {
        let mut actions = digits("7");
        actions.push(Action::ChooseOperation(ArithOp::Divide));
        actions.extend(digits("0"));
        actions.push(Action::Compute);

        let state = apply_all(&actions);
        assert_eq!(state.current, Operand::Error);
        assert_eq!(state.previous, Operand::Empty);
        assert_eq!(state.op, None);
    }

    #[test]
    fn error_sentinel_ignores_digits_and_operations() {
        let error_state = State {
            current: Operand::Error,
            ..Default::default()
        };

        let after_digit = reduce(&error_state, Action::InsertDigit('5'));
        assert_eq!(after_digit, error_state);

        let after_op = reduce(&error_state, Action::ChooseOperation(ArithOp::Add));
        assert_eq!(after_op, error_state);
    }

    #[test]
    fn delete_on_error_is_a_full_clear() {
        let error_state = State {
            current: Operand::Error,
            ..Default::default()
        };
        let state = reduce(&error_state, Action::DeleteLast);
        assert_eq!(state.current, Operand::Empty);
        assert_eq!(state.previous, Operand::Empty);
        assert_eq!(state.op, None);
    }

    #[test]
    fn delete_last_shrinks_and_empties_the_operand() {
        let state = apply_all(&digits("12"));
        let state = reduce(&state, Action::DeleteLast);
        assert_eq!(state.current, Operand::from("1"));
        let state = reduce(&state, Action::DeleteLast);
        assert_eq!(state.current, Operand::Empty);
        // Deleting past empty stays empty.
        let state = reduce(&state, Action::DeleteLast);
        assert_eq!(state.current, Operand::Empty);
    }

    #[test]
    fn choosing_an_operation_commits_the_operand() {
        let mut actions = digits("5");
        actions.push(Action::ChooseOperation(ArithOp::Add));

        let state = apply_all(&actions);
        assert_eq!(state.previous, Operand::from("5"));
        assert_eq!(state.op, Some(ArithOp::Add));
        assert_eq!(state.current, Operand::Empty);
    }

    #[test]
    fn choosing_an_operation_with_empty_operand_is_a_noop() {
        let state = reduce(&State::default(), Action::ChooseOperation(ArithOp::Add));
        assert_eq!(state, State::default());
    }

    #[test]
    fn chained_operations_collapse_eagerly() {
        // 5 + 3 - : the pending addition computes, 8 becomes the previous
        // operand of the new subtraction.
        let mut actions = digits("5");
        actions.push(Action::ChooseOperation(ArithOp::Add));
        actions.extend(digits("3"));
        actions.push(Action::ChooseOperation(ArithOp::Subtract));

        let state = apply_all(&actions);
        assert_eq!(state.previous, Operand::from("8"));
        assert_eq!(state.op, Some(ArithOp::Subtract));
        assert_eq!(state.current, Operand::Empty);
    }

    #[test]
    fn chained_division_by_zero_does_not_leak_into_previous() {
        let mut actions = digits("5");
        actions.push(Action::ChooseOperation(ArithOp::Divide));
        actions.extend(digits("0"));
        actions.push(Action::ChooseOperation(ArithOp::Add));

        let state = apply_all(&actions);
        assert_eq!(state.current, Operand::Error);
        assert_eq!(state.previous, Operand::Empty);
        assert_eq!(state.op, None);
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut actions = digits("5");
        actions.push(Action::ChooseOperation(ArithOp::Add));
        actions.extend(digits("3"));
        actions.push(Action::ClearAll);

        let state = apply_all(&actions);
        assert_eq!(state.current, Operand::Empty);
        assert_eq!(state.previous, Operand::Empty);
        assert_eq!(state.op, None);
    }

    #[test]
    fn reduce_does_not_touch_viewport_bookkeeping() {
        let state = State {
            max_display_width: 80,
            origin_row: 12,
            ..Default::default()
        };
        let next = reduce(&state, Action::InsertDigit('1'));
        assert_eq!(next.max_display_width, 80);
        assert_eq!(next.origin_row, 12);
    }
}
