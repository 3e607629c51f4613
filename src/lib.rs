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

//! # r3bl_calc
//!
//! A four function calculator that runs inline in your terminal. It paints a
//! small viewport at the cursor position (no alternate screen), takes both
//! keyboard and mouse input, and cleans up after itself when you quit.
//!
//! ## How to use it as a library
//!
//! The whole calculator is one blocking call:
//!
//! ```no_run
//! use r3bl_calc::{run_calculator, StyleSheet};
//!
//! if let Some(result) = run_calculator(StyleSheet::default()) {
//!     println!("{result}");
//! }
//! ```
//!
//! The arithmetic core is independent of the terminal: [State] is a plain
//! value, [reduce] is a pure function from a state and an [Action] to the
//! next state. You can drive it without any TTY at all, which is also how
//! the tests work:
//!
//! ```
//! use r3bl_calc::{reduce, Action, ArithOp, Operand, State};
//!
//! let mut state = State::default();
//! for action in [
//!     Action::InsertDigit('5'),
//!     Action::ChooseOperation(ArithOp::Add),
//!     Action::InsertDigit('3'),
//!     Action::Compute,
//! ] {
//!     state = reduce(&state, action);
//! }
//! assert_eq!(state.current, Operand::Digits("8".into()));
//! ```
//!
//! ## How to use it as a binary
//!
//! ```text
//! > cargo install r3bl_calc
//! > rcalc
//! ```
//!
//! Keyboard bindings: digits and `.` build the current operand, `+ - * /`
//! choose an operation, `Enter` or `=` computes, `Backspace` deletes one
//! character, `Esc` clears everything, `q` or `Ctrl+C` quits. Every button
//! on the rendered keypad is also clickable.
//!
//! Division by zero displays the `Error` sentinel; any key other than
//! `Esc` or `Backspace` is ignored until the error is cleared.

#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod components;
pub mod event_loop;
pub mod format;
pub mod function_component;
pub mod keypad;
pub mod keypress;
pub mod logging;
pub mod public_api;
pub mod reducer;
pub mod state;
pub mod term;
pub mod test_utils;

pub use components::*;
pub use event_loop::*;
pub use format::*;
pub use function_component::*;
pub use keypress::*;
pub use logging::*;
pub use public_api::*;
pub use reducer::*;
pub use state::*;
pub use term::*;
pub use test_utils::*;
