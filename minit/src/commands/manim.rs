// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::env;

use minit_tools::{
    core::prompt::{Console, Defaults},
    ops,
};

use crate::{common_args::EditorArgs, error::MinitResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Project name, used for the directory and the scene class
    name: String,
    /// Accept the default render settings without prompting
    #[arg(long)]
    defaults: bool,

    #[command(flatten)]
    editor: EditorArgs,
}

pub fn exec(args: Args) -> MinitResult {
    let cwd = env::current_dir()?;
    let editor = args.editor.config();
    if args.defaults {
        ops::manim(cwd, &args.name, &mut Defaults, &editor)?;
    } else {
        ops::manim(cwd, &args.name, &mut Console::stdio(), &editor)?;
    }
    Ok(())
}
