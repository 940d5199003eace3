// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::{Path, PathBuf};

use crate::core::{
    editor::{self, EditorConfig},
    project::{create_project_dir, init_latex, LatexOptions, ProjectKind},
};

/// Create a new LaTeX project inside `parent`, named after `options.project_name`.
///
/// Returns the path of the new project.
pub fn latex(
    parent: impl AsRef<Path>,
    options: &LatexOptions,
    editor: &EditorConfig,
) -> eyre::Result<PathBuf> {
    debug!(@grey, "project name: {}", options.project_name);
    if options.packages.is_empty() {
        debug!(@grey, "no packages");
    } else {
        debug!(@grey, "packages: {}", options.packages.join(", "));
    }
    debug!(@grey, "class: {}", options.document_class());

    let dir = create_project_dir(parent, &options.project_name)?;
    init_latex(&dir, options)?;
    info!(@mint, "created {} project {}", ProjectKind::Latex, options.project_name);

    editor::open(editor, &dir);
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::project::latex::{BIBLIOGRAPHY_FILE, DOCUMENT_FILE};

    fn no_editor() -> EditorConfig {
        EditorConfig {
            open: false,
            ..Default::default()
        }
    }

    #[test]
    fn creates_project() {
        let parent = tempfile::tempdir().unwrap();
        let options = LatexOptions {
            packages: vec!["hyperref".to_string()],
            bibliography: true,
            ..LatexOptions::new("Paper")
        };
        let dir = latex(parent.path(), &options, &no_editor()).unwrap();

        assert_eq!(dir, parent.path().join("Paper"));
        let document = fs::read_to_string(dir.join(DOCUMENT_FILE)).unwrap();
        assert_eq!(document, options.document());
        assert_eq!(fs::read(dir.join(BIBLIOGRAPHY_FILE)).unwrap().len(), 0);
    }

    #[test]
    fn second_run_fails() {
        let parent = tempfile::tempdir().unwrap();
        let options = LatexOptions::new("Paper");
        latex(parent.path(), &options, &no_editor()).unwrap();
        let err = latex(parent.path(), &options, &no_editor()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
