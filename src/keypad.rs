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

//! The on-screen keypad.
//!
//! The geometry is fixed: every button renders as `[ x ]` (5 cells) with one
//! cell of gap, so hit-testing a mouse click is pure index arithmetic over
//! viewport-local coordinates. Buttons carry the same [Action]s the keyboard
//! produces; the two input surfaces are interchangeable.

use crate::{Action, ArithOp};

/// Rendered width of one button, `[ x ]`.
pub const BUTTON_WIDTH: u16 = 5;
/// Horizontal distance between the left edges of adjacent buttons.
pub const BUTTON_PITCH: u16 = BUTTON_WIDTH + 1;

/// One keypad button: a display label and the action a click dispatches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
}

const fn digit(label: &'static str, ch: char) -> Button {
    Button {
        label,
        action: Action::InsertDigit(ch),
    }
}

const fn op(label: &'static str, op: ArithOp) -> Button {
    Button {
        label,
        action: Action::ChooseOperation(op),
    }
}

/// Row-major button layout. Operator labels use the display glyphs.
pub const KEYPAD_ROWS: &[&[Button]] = &[
    &[
        digit("7", '7'),
        digit("8", '8'),
        digit("9", '9'),
        op("÷", ArithOp::Divide),
    ],
    &[
        digit("4", '4'),
        digit("5", '5'),
        digit("6", '6'),
        op("×", ArithOp::Multiply),
    ],
    &[
        digit("1", '1'),
        digit("2", '2'),
        digit("3", '3'),
        op("−", ArithOp::Subtract),
    ],
    &[
        digit("0", '0'),
        digit(".", '.'),
        Button {
            label: "=",
            action: Action::Compute,
        },
        op("+", ArithOp::Add),
    ],
    &[
        Button {
            label: "AC",
            action: Action::ClearAll,
        },
        Button {
            label: "DEL",
            action: Action::DeleteLast,
        },
    ],
];

/// Number of keypad rows in the viewport.
pub fn row_count() -> u16 {
    KEYPAD_ROWS.len() as u16
}

/// Width in cells of the widest keypad row. The display lines are padded to
/// this width so the viewport forms one rectangle.
pub fn grid_width() -> u16 {
    let max_buttons = KEYPAD_ROWS.iter().map(|row| row.len()).max().unwrap_or(0);
    match max_buttons as u16 {
        0 => 0,
        n => n * BUTTON_PITCH - (BUTTON_PITCH - BUTTON_WIDTH),
    }
}

/// Render one keypad row as text, eg `[ 7 ] [ 8 ] [ 9 ] [ ÷ ]`.
pub fn render_row(row_index: usize) -> String {
    let Some(row) = KEYPAD_ROWS.get(row_index) else {
        return String::new();
    };
    row.iter()
        .map(|button| format!("[{:^3}]", button.label))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hit-test a click at keypad-local coordinates (column within the viewport,
/// row counted from the first keypad line). Gaps between and beyond buttons
/// return `None`.
pub fn hit_test(col: u16, row: u16) -> Option<Action> {
    let buttons = KEYPAD_ROWS.get(row as usize)?;
    if col % BUTTON_PITCH >= BUTTON_WIDTH {
        return None; // In the gap between buttons.
    }
    let button_index = (col / BUTTON_PITCH) as usize;
    buttons.get(button_index).map(|button| button.action)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_button_cell_maps_to_its_action() {
        for (row_index, row) in KEYPAD_ROWS.iter().enumerate() {
            for (button_index, button) in row.iter().enumerate() {
                let left = button_index as u16 * BUTTON_PITCH;
                for col in left..left + BUTTON_WIDTH {
                    assert_eq!(
                        hit_test(col, row_index as u16),
                        Some(button.action),
                        "row {row_index} col {col}"
                    );
                }
            }
        }
    }

    #[test]
    fn gaps_and_out_of_range_cells_miss() {
        // Gap between the first and second button.
        assert_eq!(hit_test(BUTTON_WIDTH, 0), None);
        // Past the last button of the short bottom row.
        let bottom = row_count() - 1;
        assert_eq!(hit_test(2 * BUTTON_PITCH, bottom), None);
        // Below the keypad.
        assert_eq!(hit_test(0, row_count()), None);
    }

    #[test]
    fn click_targets_match_keyboard_actions() {
        assert_eq!(hit_test(0, 0), Some(Action::InsertDigit('7')));
        assert_eq!(
            hit_test(3 * BUTTON_PITCH, 0),
            Some(Action::ChooseOperation(ArithOp::Divide))
        );
        assert_eq!(hit_test(2 * BUTTON_PITCH, 3), Some(Action::Compute));
        assert_eq!(hit_test(0, 4), Some(Action::ClearAll));
        assert_eq!(hit_test(BUTTON_PITCH, 4), Some(Action::DeleteLast));
    }

    #[test]
    fn rows_render_with_bracketed_labels() {
        assert_eq!(render_row(0), "[ 7 ] [ 8 ] [ 9 ] [ ÷ ]");
        assert_eq!(render_row(4), "[AC ] [DEL]");
        assert_eq!(render_row(99), "");
    }

    #[test]
    fn grid_width_covers_the_widest_row() {
        assert_eq!(grid_width(), 23);
    }
}
