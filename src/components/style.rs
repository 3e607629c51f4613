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

use crossterm::{queue,
                style::{Attribute, Color, SetAttribute, SetBackgroundColor,
                        SetForegroundColor}};

/// Styling for one viewport line.
#[derive(Copy, Clone, Debug, Default)]
pub struct LineStyle {
    pub fg_color: Option<Color>,
    pub bg_color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl LineStyle {
    /// Queue the ANSI commands for this style. The caller resets colors
    /// after printing the line.
    pub fn apply<W: Write>(&self, writer: &mut W) -> Result<()> {
        if let Some(fg_color) = self.fg_color {
            queue!(writer, SetForegroundColor(fg_color))?;
        }
        if let Some(bg_color) = self.bg_color {
            queue!(writer, SetBackgroundColor(bg_color))?;
        }
        if self.bold {
            queue!(writer, SetAttribute(Attribute::Bold))?;
        }
        if self.dim {
            queue!(writer, SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct StyleSheet {
    pub header_style: LineStyle,
    pub pending_style: LineStyle,
    pub current_style: LineStyle,
    pub error_style: LineStyle,
    pub keypad_style: LineStyle,
    pub hint_style: LineStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let header_style = LineStyle {
            fg_color: Some(Color::Rgb {
                r: 50,
                g: 50,
                b: 50,
            }),
            bg_color: Some(Color::Rgb {
                r: 150,
                g: 150,
                b: 150,
            }),
            bold: true,
            ..LineStyle::default()
        };
        let pending_style = LineStyle {
            dim: true,
            ..LineStyle::default()
        };
        let current_style = LineStyle {
            bold: true,
            ..LineStyle::default()
        };
        let error_style = LineStyle {
            fg_color: Some(Color::Red),
            bold: true,
            ..LineStyle::default()
        };
        let keypad_style = LineStyle {
            fg_color: Some(Color::Rgb {
                r: 200,
                g: 200,
                b: 1,
            }),
            ..LineStyle::default()
        };
        let hint_style = LineStyle {
            dim: true,
            ..LineStyle::default()
        };
        StyleSheet {
            header_style,
            pending_style,
            current_style,
            error_style,
            keypad_style,
            hint_style,
        }
    }
}
