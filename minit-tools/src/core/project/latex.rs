// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! LaTeX document projects.

use std::{io, path::Path};

pub const DOCUMENT_FILE: &str = "main.tex";
pub const BIBLIOGRAPHY_FILE: &str = "main.bib";

pub const DEFAULT_DOCUMENT_CLASS: &str = "article";
pub const DEFAULT_LANGUAGE: &str = "english";

/// Packages every document imports.
const DEFAULT_PACKAGES: &[&str] = &["amsmath", "amssymb"];
/// Packages which take the document language as their option.
const LANGUAGE_PACKAGES: &[&str] = &["babel", "varioref", "cleveref"];
const BIBLATEX: &str = r"\usepackage[backend=biber]{biblatex}";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LatexOptions {
    pub project_name: String,
    /// Extra packages, imported in order after the defaults.
    pub packages: Vec<String>,
    pub document_class: Option<String>,
    pub language: Option<String>,
    /// Whether to set up biblatex and an empty `main.bib`.
    pub bibliography: bool,
}

impl LatexOptions {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    /// Document class, `article` when unset or empty.
    pub fn document_class(&self) -> &str {
        non_empty(&self.document_class).unwrap_or(DEFAULT_DOCUMENT_CLASS)
    }

    /// Document language, `english` when unset or empty.
    pub fn language(&self) -> &str {
        non_empty(&self.language).unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Contents of `main.tex`.
    pub fn document(&self) -> String {
        let language = self.language();

        let mut lines = vec![
            format!(r"\documentclass{{{}}}", self.document_class()),
            String::new(),
        ];
        if self.bibliography {
            lines.push(BIBLATEX.to_string());
        }
        lines.extend(
            DEFAULT_PACKAGES
                .iter()
                .map(|package| format!(r"\usepackage{{{package}}}")),
        );
        lines.extend(
            LANGUAGE_PACKAGES
                .iter()
                .map(|package| format!(r"\usepackage[{language}]{{{package}}}")),
        );
        if self.packages.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(
                self.packages
                    .iter()
                    .map(|package| format!(r"\usepackage{{{package}}}")),
            );
        }
        lines.extend([
            String::new(),
            r"\begin{document}".to_string(),
            "    Hello World!".to_string(),
            r"\end{document}".to_string(),
        ]);

        let mut document = lines.join("\n");
        document.push('\n');
        document
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Write the LaTeX project files into the existing directory `dir`.
pub fn init_latex(dir: impl AsRef<Path>, options: &LatexOptions) -> io::Result<()> {
    let dir = dir.as_ref();

    if options.bibliography {
        super::write_file(dir, BIBLIOGRAPHY_FILE, "")?;
    }
    super::write_file(dir, DOCUMENT_FILE, options.document())?;

    Ok(())
}
