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

//! Opt-in file logging.
//!
//! The calculator owns the terminal while it runs, so log output can never go
//! to stdout or stderr. When logging is enabled, `tracing` events are written
//! to a file instead, via a non blocking appender.

use tracing_appender::non_blocking::WorkerGuard;

pub const DEFAULT_LOG_FILE_NAME: &str = "rcalc.log";

/// A second subscriber install (or one raced by another library) fails; the
/// underlying error type is not exported, so carry its message.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("failed to install tracing subscriber: {0}")]
pub struct LoggingInitError(String);

/// Install a global `tracing` subscriber that appends to the given file in
/// the current directory.
///
/// Returns the appender's [WorkerGuard]. The caller must keep it alive for
/// the lifetime of the program, otherwise buffered log lines are dropped.
pub fn try_initialize_logging(file_name: &str) -> miette::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .map_err(|err| LoggingInitError(err.to_string()))?;

    Ok(guard)
}
