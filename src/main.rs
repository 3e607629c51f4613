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

use clap::Parser;
use crossterm::style::Stylize;
use r3bl_calc::{is_fully_interactive_terminal, logging, run_calculator, StyleSheet,
                TTYResult, DEFAULT_LOG_FILE_NAME};

/// An inline terminal calculator. Type digits and operators, or click the
/// keypad; quit with `q` and the final value is printed to stdout.
#[derive(Debug, Parser)]
#[command(bin_name = "rcalc")]
#[command(about = "An inline terminal calculator with keyboard and mouse input")]
#[command(version)]
#[command(next_line_help = true)]
pub struct CliArgs {
    /// Enables logging to a file
    #[arg(short = 'l', long = "log")]
    pub enable_logging: bool,

    /// Log file name, used with --log. Defaults to `rcalc.log` in the
    /// current directory
    #[arg(long = "log-file", requires = "enable_logging")]
    pub log_file: Option<String>,
}

fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    // Keep the appender guard alive until main returns, or buffered log
    // lines never reach the file.
    let _log_guard = if cli_args.enable_logging {
        let file_name = cli_args
            .log_file
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
        Some(logging::try_initialize_logging(&file_name)?)
    } else {
        None
    };

    if let TTYResult::IsNotInteractive = is_fully_interactive_terminal() {
        eprintln!(
            "{}",
            "rcalc needs an interactive terminal to run. Try it from a shell, \
             not a pipe."
                .red()
        );
        return Ok(());
    }

    tracing::debug!("starting rcalc");

    if let Some(result) = run_calculator(StyleSheet::default()) {
        println!("{result}");
    }

    Ok(())
}
