// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Manim animation projects.
//!
//! A manim project consists of a `manim.cfg` holding render settings, a `main.py` with an
//! empty scene named after the project, and a `pyproject.toml` which quiets linters about the
//! wildcard manim import.

use std::{
    fmt, io,
    num::{ParseFloatError, ParseIntError},
    path::Path,
};

use crate::core::{
    prompt::{Prompt, PromptError},
    resolution::{Resolution, UnknownResolution},
};

pub const CONFIG_FILE: &str = "manim.cfg";
pub const SOURCE_FILE: &str = "main.py";
pub const PYPROJECT_FILE: &str = "pyproject.toml";

pub const DEFAULT_FRAME_RATE: u32 = 30;
pub const DEFAULT_BACKGROUND_COLOR: &str = "BLACK";
pub const DEFAULT_BACKGROUND_OPACITY: f32 = 1.0;

const FRAME_RATE_PROMPT: &str = "Frame rate [30]: ";
const RESOLUTION_PROMPT: &str =
    "Resolution:\n(240p, 480p, 720p, 1080p, 1440p, 2160p) [480p]: ";
const BACKGROUND_COLOR_PROMPT: &str = "Background color [BLACK]: ";
const BACKGROUND_OPACITY_PROMPT: &str = "Background opacity [1]: ";

/// Errors which may occur while setting up a manim project.
#[derive(Debug, thiserror::Error)]
pub enum ManimError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Prompt(#[from] PromptError),

    #[error("invalid frame rate `{input}`: {source}")]
    InvalidFrameRate {
        input: String,
        source: ParseIntError,
    },
    #[error("invalid background opacity `{input}`: {source}")]
    InvalidOpacity {
        input: String,
        source: ParseFloatError,
    },
    #[error("{0}")]
    Resolution(#[from] UnknownResolution),
}

/// Render settings for a manim project.
///
/// The [`Display`](fmt::Display) output is the contents of `manim.cfg`.
#[derive(Clone, Debug, PartialEq)]
pub struct ManimOptions {
    pub frame_rate: u32,
    pub resolution: Resolution,
    pub background_color: String,
    pub background_opacity: f32,
    pub scene_name: String,
}

impl ManimOptions {
    pub fn new(
        scene_name: impl Into<String>,
        frame_rate: u32,
        resolution: Resolution,
        background_color: impl Into<String>,
        background_opacity: f32,
    ) -> Self {
        Self {
            frame_rate,
            resolution,
            background_color: background_color.into(),
            background_opacity,
            scene_name: scene_name.into(),
        }
    }

    /// Ask for each setting in turn, falling back to the defaults on empty answers.
    ///
    /// Answers are checked as soon as they are read, so a bad resolution is reported before
    /// the background questions are asked.
    pub fn prompt<P: Prompt + ?Sized>(
        scene_name: impl Into<String>,
        prompt: &mut P,
    ) -> Result<Self, ManimError> {
        let frame_rate = prompt.prompt(FRAME_RATE_PROMPT, &DEFAULT_FRAME_RATE.to_string())?;
        let frame_rate = parse_frame_rate(&frame_rate)?;
        let resolution = prompt
            .prompt(RESOLUTION_PROMPT, Resolution::default().label())?
            .parse::<Resolution>()?;
        let background_color = prompt.prompt(BACKGROUND_COLOR_PROMPT, DEFAULT_BACKGROUND_COLOR)?;
        let background_opacity = prompt.prompt(
            BACKGROUND_OPACITY_PROMPT,
            &DEFAULT_BACKGROUND_OPACITY.to_string(),
        )?;
        let background_opacity = parse_opacity(&background_opacity)?;

        Ok(Self::new(
            scene_name,
            frame_rate,
            resolution,
            background_color,
            background_opacity,
        ))
    }

    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    pub fn height(&self) -> u32 {
        self.resolution.height()
    }
}

impl fmt::Display for ManimOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[CLI]")?;
        writeln!(f, "frame_rate = {}", self.frame_rate)?;
        writeln!(f, "pixel_height = {}", self.height())?;
        writeln!(f, "pixel_width = {}", self.width())?;
        writeln!(f, "background_color = {}", self.background_color)?;
        writeln!(f, "background_opacity = {}", self.background_opacity)?;
        writeln!(f, "scene_names = {}", self.scene_name)
    }
}

pub fn parse_frame_rate(input: &str) -> Result<u32, ManimError> {
    input
        .trim()
        .parse()
        .map_err(|source| ManimError::InvalidFrameRate {
            input: input.to_string(),
            source,
        })
}

pub fn parse_opacity(input: &str) -> Result<f32, ManimError> {
    input
        .trim()
        .parse()
        .map_err(|source| ManimError::InvalidOpacity {
            input: input.to_string(),
            source,
        })
}

/// Contents of `main.py`: an empty scene class which renders itself when run directly.
///
/// The indentation and the signature of `construct` are kept exactly as existing projects
/// were generated.
pub fn source_file(scene_name: &str) -> String {
    format!(
        "from manim import *\n\
         import os\n\
         \n\
         \n\
         class {scene_name}(Scene):\n   \
         def construct(self)\n       \
         pass\n\
         \n\
         \n\
         if __name__ == \"__main__\":\n   \
         os.system(\"manim main.py\")\n"
    )
}

/// Write the manim project files into the existing directory `dir`.
pub fn init_manim(dir: impl AsRef<Path>, options: &ManimOptions) -> Result<(), ManimError> {
    let dir = dir.as_ref();

    super::write_file(dir, CONFIG_FILE, options.to_string())?;
    super::write_file(dir, SOURCE_FILE, source_file(&options.scene_name))?;
    copy_from_template!("src/templates/manim" -> dir, "pyproject.toml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::prompt::{Console, Defaults};

    fn answers(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn config_file_for_defaults() {
        let options = ManimOptions::new("Foo", 30, Resolution::P480, "BLACK", 1.0);
        assert_eq!(
            options.to_string(),
            "[CLI]\n\
             frame_rate = 30\n\
             pixel_height = 480\n\
             pixel_width = 854\n\
             background_color = BLACK\n\
             background_opacity = 1\n\
             scene_names = Foo\n"
        );
    }

    #[test]
    fn config_file_fractional_opacity() {
        let options = ManimOptions::new("Intro", 60, Resolution::P1080, "#1e1e1e", 0.5);
        let config = options.to_string();
        assert!(config.contains("pixel_height = 1080\npixel_width = 1920\n"));
        assert!(config.contains("background_opacity = 0.5\n"));
    }

    #[test]
    fn prompt_empty_answers_use_defaults() {
        let options = ManimOptions::prompt("Foo", &mut answers("\n\n\n\n")).unwrap();
        assert_eq!(
            options,
            ManimOptions::new("Foo", 30, Resolution::P480, "BLACK", 1.0)
        );
    }

    #[test]
    fn prompt_matches_defaults_prompter() {
        let prompted = ManimOptions::prompt("Foo", &mut answers("")).unwrap();
        let defaults = ManimOptions::prompt("Foo", &mut Defaults).unwrap();
        assert_eq!(prompted, defaults);
    }

    #[test]
    fn prompt_reads_answers_in_order() {
        let mut console = answers("60\n1440p\nWHITE\n0.25\n");
        let options = ManimOptions::prompt("Intro", &mut console).unwrap();
        assert_eq!(
            options,
            ManimOptions::new("Intro", 60, Resolution::P1440, "WHITE", 0.25)
        );

        let (_, output) = console.into_inner();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Frame rate [30]: \
             Resolution:\n(240p, 480p, 720p, 1080p, 1440p, 2160p) [480p]: \
             Background color [BLACK]: \
             Background opacity [1]: "
        );
    }

    #[test]
    fn prompt_rejects_bad_frame_rate() {
        let err = ManimOptions::prompt("Foo", &mut answers("fast\n")).unwrap_err();
        assert!(matches!(err, ManimError::InvalidFrameRate { input, .. } if input == "fast"));
    }

    #[test]
    fn prompt_rejects_bad_opacity() {
        let err = ManimOptions::prompt("Foo", &mut answers("\n\n\nhalf\n")).unwrap_err();
        assert!(matches!(err, ManimError::InvalidOpacity { input, .. } if input == "half"));
    }

    #[test]
    fn prompt_stops_at_unknown_resolution() {
        let mut console = answers("\n4k\n");
        let err = ManimOptions::prompt("Foo", &mut console).unwrap_err();
        assert!(matches!(err, ManimError::Resolution(UnknownResolution { label }) if label == "4k"));

        let (_, output) = console.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("Background color"));
    }

    #[test]
    fn source_file_layout() {
        assert_eq!(
            source_file("Foo"),
            "from manim import *\n\
             import os\n\
             \n\
             \n\
             class Foo(Scene):\n\
             \x20  def construct(self)\n\
             \x20      pass\n\
             \n\
             \n\
             if __name__ == \"__main__\":\n\
             \x20  os.system(\"manim main.py\")\n"
        );
    }

    #[test]
    fn writes_project_files() {
        let dir = tempfile::tempdir().unwrap();
        let options = ManimOptions::new("Foo", 30, Resolution::P720, "BLACK", 1.0);
        init_manim(dir.path(), &options).unwrap();

        let config = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, options.to_string());
        let source = fs::read_to_string(dir.path().join(SOURCE_FILE)).unwrap();
        assert!(source.contains("class Foo(Scene):"));

        let pyproject = fs::read_to_string(dir.path().join(PYPROJECT_FILE)).unwrap();
        assert!(!pyproject.ends_with('\n'));
        let pyproject: toml::Table = pyproject.parse().unwrap();
        assert_eq!(pyproject["tool"]["pylama"]["ignore"].as_str(), Some("W0401"));
        assert_eq!(
            pyproject["tool"]["pyright"]["reportWildcardImportFromLibrary"].as_str(),
            Some("none")
        );
    }
}
