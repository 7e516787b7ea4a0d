//! Word count command

use crate::commands::Context;
use crate::error::CliResult;
use crate::output::print_value;
use clap::Args;
use drills_core::count_word_occurrences;

/// Arguments for `drills count`
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Sentence to search
    pub sentence: String,

    /// Word to count (case-insensitive, whole tokens only)
    pub word: String,
}

pub fn execute(args: CountArgs, ctx: &Context) -> CliResult<()> {
    let count = count_word_occurrences(&args.sentence, &args.word);
    print_value(&count, count, ctx.output)
}
