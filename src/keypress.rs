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

//! Input event translation.
//!
//! This is the thin adapter between crossterm and the reducer. Key presses
//! that have a calculator meaning become [CalcInput::Dispatch]; a left click
//! passes its coordinates through for keypad hit-testing; everything else is
//! [CalcInput::Noop].

use crossterm::event::{Event,
                       KeyCode,
                       KeyEvent,
                       KeyEventKind,
                       KeyModifiers,
                       MouseButton,
                       MouseEvent,
                       MouseEventKind};

use crate::{Action, ArithOp};

/// One input event, as seen by the event loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CalcInput {
    /// A calculator action, ready for the reducer.
    Dispatch(Action),
    /// Left mouse button pressed at the given 0-based terminal cell.
    Click { col: u16, row: u16 },
    /// Terminal was resized to the given column count; the viewport needs
    /// its clipping width refreshed, then a clear and repaint.
    Resize { width: u16 },
    /// `q` or `Ctrl+C`.
    Quit,
    Noop,
}

/// Blocking source of input events. The terminal implementation wraps
/// [crossterm::event::read]; tests use [TestVecInputReader] instead.
pub trait CalcInputReader {
    fn read_input(&mut self) -> Option<CalcInput>;
}

#[derive(Debug)]
pub struct CrosstermInputReader;

impl CalcInputReader for CrosstermInputReader {
    fn read_input(&mut self) -> Option<CalcInput> {
        let event = crossterm::event::read().ok()?;
        tracing::debug!("event: {event:?}");
        Some(translate_event(event))
    }
}

/// Deterministic reader for tests. Walks the vec and wraps around, same as
/// the test readers in the rest of the monorepo.
#[derive(Debug)]
pub struct TestVecInputReader {
    pub input_vec: Vec<CalcInput>,
    pub index: Option<usize>,
}

impl TestVecInputReader {
    pub fn new(input_vec: Vec<CalcInput>) -> Self {
        Self {
            input_vec,
            index: None,
        }
    }
}

impl CalcInputReader for TestVecInputReader {
    fn read_input(&mut self) -> Option<CalcInput> {
        match self.index {
            Some(index) if index + 1 < self.input_vec.len() => {
                self.index = Some(index + 1);
            }
            Some(_) | None => {
                self.index = Some(0);
            }
        }
        self.index.and_then(|index| self.input_vec.get(index).copied())
    }
}

/// Map a crossterm event to a calculator input. Unbound keys are no-ops.
pub fn translate_event(event: Event) -> CalcInput {
    match event {
        Event::Key(key_event) => translate_key_event(key_event),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => CalcInput::Click { col: column, row },
        Event::Resize(width, _) => CalcInput::Resize { width },
        _ => CalcInput::Noop,
    }
}

fn translate_key_event(key_event: KeyEvent) -> CalcInput {
    // [KeyEvent::kind] is only ever something other than `Press` on Windows
    // (or with keyboard enhancement flags pushed). Filter here so release
    // events do not double-enter digits.
    if key_event.kind != KeyEventKind::Press {
        return CalcInput::Noop;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') => CalcInput::Quit,
            _ => CalcInput::Noop,
        };
    }

    match key_event.code {
        KeyCode::Char(ch @ ('0'..='9' | '.')) => {
            CalcInput::Dispatch(Action::InsertDigit(ch))
        }
        KeyCode::Char('+') => CalcInput::Dispatch(Action::ChooseOperation(ArithOp::Add)),
        KeyCode::Char('-') => {
            CalcInput::Dispatch(Action::ChooseOperation(ArithOp::Subtract))
        }
        KeyCode::Char('*') => {
            CalcInput::Dispatch(Action::ChooseOperation(ArithOp::Multiply))
        }
        KeyCode::Char('/') => {
            CalcInput::Dispatch(Action::ChooseOperation(ArithOp::Divide))
        }
        KeyCode::Enter | KeyCode::Char('=') => CalcInput::Dispatch(Action::Compute),
        KeyCode::Backspace => CalcInput::Dispatch(Action::DeleteLast),
        KeyCode::Esc => CalcInput::Dispatch(Action::ClearAll),
        KeyCode::Char('q') => CalcInput::Quit,
        _ => CalcInput::Noop,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn digits_and_dot_translate_to_insert() {
        assert_eq!(
            translate_event(press(KeyCode::Char('7'))),
            CalcInput::Dispatch(Action::InsertDigit('7'))
        );
        assert_eq!(
            translate_event(press(KeyCode::Char('.'))),
            CalcInput::Dispatch(Action::InsertDigit('.'))
        );
    }

    #[test]
    fn ascii_operators_translate_to_choose_operation() {
        assert_eq!(
            translate_event(press(KeyCode::Char('*'))),
            CalcInput::Dispatch(Action::ChooseOperation(ArithOp::Multiply))
        );
        assert_eq!(
            translate_event(press(KeyCode::Char('/'))),
            CalcInput::Dispatch(Action::ChooseOperation(ArithOp::Divide))
        );
    }

    #[test]
    fn enter_and_equals_both_compute() {
        assert_eq!(
            translate_event(press(KeyCode::Enter)),
            CalcInput::Dispatch(Action::Compute)
        );
        assert_eq!(
            translate_event(press(KeyCode::Char('='))),
            CalcInput::Dispatch(Action::Compute)
        );
    }

    #[test]
    fn backspace_deletes_and_esc_clears() {
        assert_eq!(
            translate_event(press(KeyCode::Backspace)),
            CalcInput::Dispatch(Action::DeleteLast)
        );
        assert_eq!(
            translate_event(press(KeyCode::Esc)),
            CalcInput::Dispatch(Action::ClearAll)
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(translate_event(press(KeyCode::Char('q'))), CalcInput::Quit);
        assert_eq!(
            translate_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            CalcInput::Quit
        );
    }

    #[test]
    fn unmapped_keys_are_noops() {
        assert_eq!(translate_event(press(KeyCode::Char('z'))), CalcInput::Noop);
        assert_eq!(translate_event(press(KeyCode::Tab)), CalcInput::Noop);
    }

    #[test]
    fn left_click_passes_coordinates_through() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 13,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate_event(event), CalcInput::Click { col: 13, row: 4 });
    }

    #[test]
    fn resize_carries_the_new_width() {
        assert_eq!(
            translate_event(Event::Resize(40, 12)),
            CalcInput::Resize { width: 40 }
        );
    }

    #[test]
    fn test_reader_walks_and_wraps() {
        let mut reader = TestVecInputReader::new(vec![
            CalcInput::Quit,
            CalcInput::Resize { width: 80 },
        ]);
        assert_eq!(reader.read_input(), Some(CalcInput::Quit));
        assert_eq!(reader.read_input(), Some(CalcInput::Resize { width: 80 }));
        assert_eq!(reader.read_input(), Some(CalcInput::Quit));
    }

    #[test]
    fn test_reader_tolerates_an_empty_vec() {
        let mut reader = TestVecInputReader::new(vec![]);
        assert_eq!(reader.read_input(), None);
        assert_eq!(reader.read_input(), None);
    }
}
