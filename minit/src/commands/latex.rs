// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::env;

use minit_tools::{core::project::LatexOptions, ops};

use crate::{common_args::EditorArgs, error::MinitResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Project name, used for the directory
    name: String,
    /// Extra packages to import, in order
    #[arg(short, long, num_args = 1.., value_delimiter = ',')]
    packages: Vec<String>,
    /// Document class [default: article]
    #[arg(short, long)]
    class: Option<String>,
    /// Language passed to babel, varioref and cleveref [default: english]
    #[arg(short, long = "lang", visible_alias = "language")]
    language: Option<String>,
    /// Set up biblatex and an empty bibliography file
    #[arg(short, long)]
    bib: bool,

    #[command(flatten)]
    editor: EditorArgs,
}

impl Args {
    fn options(&self) -> LatexOptions {
        LatexOptions {
            project_name: self.name.clone(),
            packages: self.packages.clone(),
            document_class: self.class.clone(),
            language: self.language.clone(),
            bibliography: self.bib,
        }
    }
}

pub fn exec(args: Args) -> MinitResult {
    let cwd = env::current_dir()?;
    ops::latex(cwd, &args.options(), &args.editor.config())?;
    Ok(())
}
