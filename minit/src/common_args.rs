// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use minit_tools::core::editor::{EditorConfig, DEFAULT_EDITOR};

#[derive(Debug, clap::Args)]
pub struct EditorArgs {
    /// Editor to open the new project with
    #[arg(long, default_value = DEFAULT_EDITOR)]
    editor: String,
    /// Do not open the new project in an editor
    #[arg(long)]
    no_open: bool,
}

impl EditorArgs {
    pub fn config(&self) -> EditorConfig {
        EditorConfig {
            program: self.editor.clone(),
            open: !self.no_open,
        }
    }
}
