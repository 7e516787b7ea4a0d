//! Dedup command

use crate::commands::Context;
use crate::error::CliResult;
use crate::output::{bracketed, print_value};
use clap::Args;
use drills_core::{remove_duplicate_numbers, remove_duplicate_numbers_hashed};

/// Arguments for `drills dedup`
#[derive(Debug, Args)]
pub struct DedupArgs {
    /// Numbers to deduplicate, in order
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<f64>,

    /// Use the set-backed variant (same output as the default)
    #[arg(long)]
    pub hashed: bool,
}

/// Deduplicate the given numbers.
pub fn dedup(args: &DedupArgs) -> Vec<f64> {
    if args.hashed {
        remove_duplicate_numbers_hashed(&args.numbers)
    } else {
        remove_duplicate_numbers(&args.numbers)
    }
}

pub fn execute(args: DedupArgs, ctx: &Context) -> CliResult<()> {
    let unique = dedup(&args);
    print_value(&unique, bracketed(&unique), ctx.output)
}
