// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Create project directories and the files inside them.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

pub use latex::{init_latex, LatexOptions};
pub use manim::{init_manim, ManimError, ManimOptions};

pub mod latex;
pub mod manim;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectKind {
    Manim,
    Latex,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Manim => f.write_str("manim"),
            Self::Latex => f.write_str("latex"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("destination `{}` already exists", .path.display())]
    AlreadyExists { path: PathBuf },
    #[error("failed to create `{}`: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Create the directory for project `name` inside `parent`.
///
/// Fails if the directory already exists.
pub fn create_project_dir(parent: impl AsRef<Path>, name: &str) -> Result<PathBuf, ProjectError> {
    let path = parent.as_ref().join(name);
    match fs::create_dir(&path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ProjectError::AlreadyExists { path });
        }
        Err(source) => return Err(ProjectError::Io { path, source }),
    }
    info!(@grey, "created directory {}", path.display());
    Ok(path)
}

/// Write a single project file into `dir`.
pub(crate) fn write_file(
    dir: &Path,
    filename: &str,
    contents: impl AsRef<[u8]>,
) -> io::Result<()> {
    fs::write(dir.join(filename), contents)?;
    info!(@grey, "wrote {filename}");
    Ok(())
}
