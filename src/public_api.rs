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

use crate::{components::{CalculatorComponent, StyleSheet, KEYPAD_TOP_OFFSET},
            enter_event_loop, format_operand, get_terminal_width, keypad, reduce,
            Action, CalcInput, CrosstermInputReader, EventLoopResult, State};

/// Run the calculator in the current terminal and block until the user quits.
///
/// The viewport renders inline at the cursor position (no alternate screen)
/// and is cleaned up on exit. Returns the final display text, or `None` when
/// the terminal is not interactive or the loop ends with an error.
///
/// ```no_run
/// use r3bl_calc::{run_calculator, StyleSheet};
///
/// if let Some(result) = run_calculator(StyleSheet::default()) {
///     println!("{result}");
/// }
/// ```
pub fn run_calculator(style: StyleSheet) -> Option<String> {
    let mut state = State {
        max_display_width: get_terminal_width(),
        ..Default::default()
    };

    let mut component = CalculatorComponent {
        write: std::io::stdout(),
        style,
    };

    let mut input_reader = CrosstermInputReader;

    let result = enter_event_loop(
        &mut state,
        &mut component,
        input_handler,
        &mut input_reader,
    );

    match result {
        Ok(EventLoopResult::ExitWithResult(text)) => Some(text),
        _ => None,
    }
}

/// Apply one input event to the state and tell the event loop what to do
/// next. Keyboard and keypad clicks both funnel into [reduce]; everything
/// else is loop bookkeeping.
pub fn input_handler(state: &mut State, input: CalcInput) -> EventLoopResult {
    match input {
        CalcInput::Dispatch(action) => {
            *state = reduce(state, action);
            tracing::debug!(?action, new_state = ?state, "dispatch");
            EventLoopResult::ContinueAndRerender
        }
        CalcInput::Click { col, row } => match resolve_click(state, col, row) {
            Some(action) => {
                *state = reduce(state, action);
                tracing::debug!(?action, col, row, "keypad click");
                EventLoopResult::ContinueAndRerender
            }
            None => EventLoopResult::Continue,
        },
        CalcInput::Resize { width } => {
            state.max_display_width = width;
            EventLoopResult::ContinueAndRerenderAndClear
        }
        CalcInput::Quit => EventLoopResult::ExitWithResult(final_display_text(state)),
        CalcInput::Noop => EventLoopResult::Continue,
    }
}

/// Map a click at absolute terminal coordinates onto a keypad action. The
/// keypad starts [KEYPAD_TOP_OFFSET] rows below the viewport origin recorded
/// in the state.
fn resolve_click(state: &State, col: u16, row: u16) -> Option<Action> {
    let keypad_top = state.origin_row + KEYPAD_TOP_OFFSET;
    let keypad_row = row.checked_sub(keypad_top)?;
    keypad::hit_test(col, keypad_row)
}

/// The value printed to stdout on quit: exactly what the current line of
/// the viewport shows, sentinel and digit grouping included.
fn final_display_text(state: &State) -> String {
    match format_operand(&state.current) {
        text if text.is_empty() => "0".to_string(),
        text => text,
    }
}
