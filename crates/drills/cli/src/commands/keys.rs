//! Key validation command

use crate::commands::{Context, RecordKind};
use crate::error::CliResult;
use crate::output::print_value;
use clap::Args;
use drills_core::validate_keys;

/// Arguments for `drills keys`
#[derive(Debug, Args)]
pub struct KeysArgs {
    /// Record to validate against
    #[arg(short, long, value_enum, default_value_t = RecordKind::Person)]
    pub record: RecordKind,

    /// Candidate keys
    pub keys: Vec<String>,
}

pub fn execute(args: KeysArgs, ctx: &Context) -> CliResult<()> {
    let valid = match args.record {
        RecordKind::Person => validate_keys(ctx.person(), &args.keys),
        RecordKind::Member => validate_keys(ctx.member(), &args.keys),
    };
    print_value(&valid, valid, ctx.output)
}
