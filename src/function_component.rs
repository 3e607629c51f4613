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

use crossterm::{cursor::{MoveToNextLine, MoveToPreviousLine},
                queue,
                terminal::{Clear, ClearType}};

/// A component that paints some state into an inline viewport (a block of
/// lines at the current cursor position, no alternate screen).
///
/// The default methods manage the viewport itself: space is allocated once
/// before the event loop starts, and cleared when it ends (or when a resize
/// forces a repaint from scratch). [FunctionComponent::render] must leave the
/// cursor back on the first viewport line.
pub trait FunctionComponent<W: Write, S> {
    fn get_write(&mut self) -> &mut W;

    fn calculate_viewport_height(&self, state: &S) -> u16;

    fn render(&mut self, state: &mut S) -> Result<()>;

    /// Scroll the terminal far enough that the viewport fits below the
    /// cursor, then park the cursor on the first viewport line.
    fn allocate_viewport_height_space(&mut self, state: &S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);

        // This is required so that the commands to move the cursor up and
        // down in render and clear will work.
        for _ in 0..viewport_height {
            println!();
        }

        let writer = self.get_write();
        queue! {
            writer,
            MoveToPreviousLine(viewport_height),
        }?;
        writer.flush()?;

        Ok(())
    }

    /// Blank out every viewport line and park the cursor back at the top.
    fn clear_viewport(&mut self, state: &mut S) -> Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let writer = self.get_write();

        for _ in 0..viewport_height {
            queue! {
                writer,
                Clear(ClearType::CurrentLine),
                MoveToNextLine(1),
            }?;
        }

        queue! {
            writer,
            MoveToPreviousLine(viewport_height),
        }?;
        writer.flush()?;

        Ok(())
    }
}
