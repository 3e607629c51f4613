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

use crossterm::{cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine},
                queue,
                style::{Print, ResetColor},
                terminal::{Clear, ClearType}};

use crate::{format_operand, format_pending, keypad, FunctionComponent, LineStyle,
            Operand, State, StyleSheet};

/// Viewport lines above the keypad: header, pending line, current line.
/// The event loop and the mouse hit-test both rely on this offset.
pub const KEYPAD_TOP_OFFSET: u16 = 3;

const HEADER_TEXT: &str = " rcalc ";
const HINT_TEXT: &str = "q quit · esc clear · bksp del";
const EMPTY_DISPLAY: &str = "0";

/// Paints the two display lines and the keypad into the inline viewport.
pub struct CalculatorComponent<W: Write> {
    pub write: W,
    pub style: StyleSheet,
}

impl<W: Write> FunctionComponent<W, State> for CalculatorComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    fn calculate_viewport_height(&self, _state: &State) -> u16 {
        KEYPAD_TOP_OFFSET + keypad::row_count() + /* hint line */ 1
    }

    /// Paint every viewport line and bring the cursor back to the first one.
    fn render(&mut self, state: &mut State) -> Result<()> {
        let style = self.style;
        let width = state.max_display_width;
        let viewport_height = self.calculate_viewport_height(state);

        tracing::debug!(
            "render() current: {:?}, previous: {:?}, op: {:?}",
            state.current,
            state.previous,
            state.op
        );

        // The display field is as wide as the keypad grid, so the viewport
        // reads as one rectangle.
        let field_width = keypad::grid_width() as usize;

        let pending_line = right_align(&format_pending(state), field_width);

        let current_text = match format_operand(&state.current) {
            text if text.is_empty() => EMPTY_DISPLAY.to_string(),
            text => text,
        };
        let current_style = if state.current == Operand::Error {
            style.error_style
        } else {
            style.current_style
        };
        let current_line = right_align(&current_text, field_width);

        let mut lines: Vec<(String, LineStyle)> = Vec::with_capacity(
            viewport_height as usize,
        );
        lines.push((
            format!("{HEADER_TEXT:^field_width$}"),
            style.header_style,
        ));
        lines.push((pending_line, style.pending_style));
        lines.push((current_line, current_style));
        for row_index in 0..keypad::row_count() {
            lines.push((keypad::render_row(row_index as usize), style.keypad_style));
        }
        lines.push((HINT_TEXT.to_string(), style.hint_style));

        let writer = self.get_write();
        for (text, line_style) in lines {
            let text = clip_to_width(text, width);
            queue! {
                writer,
                // Bring the caret back to the start of line.
                MoveToColumn(0),
                // Reset the colors that may have been set by the previous line.
                ResetColor,
                // Clear the current line.
                Clear(ClearType::CurrentLine),
            }?;
            line_style.apply(writer)?;
            queue! {
                writer,
                Print(text),
                ResetColor,
                MoveToNextLine(1),
            }?;
        }

        // Move the cursor back up to the first viewport line.
        queue! {
            writer,
            MoveToPreviousLine(viewport_height),
        }?;

        writer.flush()?;

        Ok(())
    }
}

fn right_align(text: &str, field_width: usize) -> String {
    format!("{text:>field_width$}")
}

/// Clip to the terminal width with a trailing ellipsis. Width 0 means the
/// width is unknown, so nothing is clipped.
fn clip_to_width(line: String, viewport_width: u16) -> String {
    let width = viewport_width as usize;
    if width == 0 || line.chars().count() <= width {
        return line;
    }
    let keep = width.saturating_sub(3);
    let clipped: String = line.chars().take(keep).collect();
    format!("{clipped}...")
}
