// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Open newly created projects in an external editor.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use crate::error::CommandError;

/// Editor launched when none is configured.
pub const DEFAULT_EDITOR: &str = "code";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Editor executable, resolved through `PATH`.
    pub program: String,
    /// Whether to launch the editor at all.
    pub open: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_EDITOR.to_string(),
            open: true,
        }
    }
}

/// Open `dir` in the configured editor.
///
/// The editor runs detached: it is never waited on and a failure to launch it is only logged.
pub fn open(config: &EditorConfig, dir: impl AsRef<Path>) {
    if !config.open {
        debug!(@grey, "skipping editor launch");
        return;
    }
    let dir = dir.as_ref();
    if let Err(err) = spawn(&config.program, dir) {
        warn!(@yellow, "could not open {} in editor: {err}", dir.display());
    }
}

/// Spawn `program` with `dir` as its only argument, without waiting for it to exit.
pub fn spawn(program: &str, dir: impl AsRef<Path>) -> Result<(), CommandError> {
    let dir = dir.as_ref();
    debug!(@grey, "launching {program} {}", dir.display());
    Command::new(program)
        .arg(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;
    Ok(())
}
