// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::{Path, PathBuf};

use crate::core::{
    editor::{self, EditorConfig},
    project::{create_project_dir, init_manim, ManimOptions, ProjectKind},
    prompt::Prompt,
};

/// Create a new manim project named `name` inside `parent`.
///
/// Render settings are asked for through `prompt` once the project directory exists. Returns
/// the path of the new project.
pub fn manim<P: Prompt + ?Sized>(
    parent: impl AsRef<Path>,
    name: &str,
    prompt: &mut P,
    editor: &EditorConfig,
) -> eyre::Result<PathBuf> {
    let dir = create_project_dir(parent, name)?;

    let options = ManimOptions::prompt(name, prompt)?;
    debug!(
        @grey,
        "{} at {}x{} {}fps",
        options.scene_name,
        options.width(),
        options.height(),
        options.frame_rate
    );
    init_manim(&dir, &options)?;
    info!(@mint, "created {} project {name}", ProjectKind::Manim);

    editor::open(editor, &dir);
    Ok(dir)
}
