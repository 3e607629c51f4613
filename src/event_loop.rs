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

use std::io::{Result, Write};

use crossterm::{cursor::{self, Hide, Show},
                event::{DisableMouseCapture, EnableMouseCapture},
                execute,
                terminal::{disable_raw_mode, enable_raw_mode}};

use crate::{is_fully_uninteractive_terminal, CalcInput, CalcInputReader,
            FunctionComponent, State, TTYResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult {
    Continue,
    ContinueAndRerender,
    /// Clear the viewport before repainting (terminal was resized).
    ContinueAndRerenderAndClear,
    /// Exit and hand the final display text back to the caller.
    ExitWithResult(String),
    ExitWithoutResult,
    ExitWithError,
}

/// Run the synchronous input loop: paint, block on the next input event,
/// hand it to `on_input`, repeat. Raw mode, cursor visibility and mouse
/// capture are set up on entry and restored on every exit path.
///
/// Returns [EventLoopResult::ExitWithError] without touching the terminal
/// when it is fully uninteractive (eg under `cargo test` or CI).
pub fn enter_event_loop<W: Write>(
    state: &mut State,
    function_component: &mut impl FunctionComponent<W, State>,
    on_input: impl Fn(&mut State, CalcInput) -> EventLoopResult,
    input_reader: &mut impl CalcInputReader,
) -> Result<EventLoopResult> {
    if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
        return Ok(EventLoopResult::ExitWithError);
    }

    execute!(function_component.get_write(), Hide, EnableMouseCapture)?;
    enable_raw_mode()?;

    // Only required once, to scroll the terminal so the whole viewport fits,
    // and to place the cursor on its first line.
    function_component.allocate_viewport_height_space(state)?;

    // Remember where the viewport starts, so mouse coordinates can be mapped
    // onto the keypad.
    if let Ok((_col, row)) = cursor::position() {
        state.origin_row = row;
    }

    let return_this: EventLoopResult;

    loop {
        function_component.render(state)?;

        let Some(input) = input_reader.read_input() else {
            return_this = EventLoopResult::ExitWithError;
            function_component.clear_viewport(state)?;
            break;
        };

        match on_input(state, input) {
            EventLoopResult::Continue | EventLoopResult::ContinueAndRerender => {
                // The loop repaints at the top.
            }
            EventLoopResult::ContinueAndRerenderAndClear => {
                function_component.clear_viewport(state)?;
            }
            result @ (EventLoopResult::ExitWithResult(_)
            | EventLoopResult::ExitWithoutResult
            | EventLoopResult::ExitWithError) => {
                return_this = result;
                function_component.clear_viewport(state)?;
                break;
            }
        }
    }

    // Perform cleanup: restore the cursor, mouse capture, and cooked mode.
    execute!(function_component.get_write(), Show, DisableMouseCapture)?;
    disable_raw_mode()?;

    Ok(return_this)
}
