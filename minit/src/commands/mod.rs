// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::MinitResult;

mod latex;
mod manim;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Create a new manim animation project
    #[clap(visible_alias = "m")]
    Manim(manim::Args),
    /// Create a new LaTeX document project
    #[clap(visible_alias = "l")]
    Latex(latex::Args),
}

pub fn exec(cmd: Command) -> MinitResult {
    match cmd {
        Command::Manim(args) => manim::exec(args),
        Command::Latex(args) => latex::exec(args),
    }
}
