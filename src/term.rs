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

use std::io;

use crossterm::terminal::size;

pub const DEFAULT_WIDTH: u16 = 80;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub col_count: u16,
    pub row_count: u16,
}

/// Get the terminal size.
pub fn get_size() -> io::Result<Size> {
    let (columns, rows) = size()?;
    Ok(Size {
        col_count: columns,
        row_count: rows,
    })
}

/// Get the terminal width. If there is a problem, return the default width.
pub fn get_terminal_width() -> u16 {
    match get_size() {
        Ok(size) => size.col_count,
        Err(_) => DEFAULT_WIDTH,
    }
}

#[derive(Debug)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [TTYResult::IsInteractive] if stdin is fully interactive.
pub fn is_fully_interactive_terminal() -> TTYResult {
    use crossterm::tty::IsTty;
    let is_tty: bool = std::io::stdin().is_tty();
    match is_tty {
        true => TTYResult::IsInteractive,
        false => TTYResult::IsNotInteractive,
    }
}

/// Returns [TTYResult::IsNotInteractive] if stdin, stdout, and stderr are
/// *all* fully uninteractive. This happens when `cargo test` runs.
pub fn is_fully_uninteractive_terminal() -> TTYResult {
    use crossterm::tty::IsTty;
    let stdin_is_tty: bool = std::io::stdin().is_tty();
    let stdout_is_tty: bool = std::io::stdout().is_tty();
    let stderr_is_tty: bool = std::io::stderr().is_tty();
    match !stdin_is_tty && !stdout_is_tty && !stderr_is_tty {
        true => TTYResult::IsNotInteractive,
        false => TTYResult::IsInteractive,
    }
}
