//! Property lookup command

use crate::commands::{Context, RecordKind};
use crate::error::CliResult;
use crate::output::print_value;
use clap::Args;
use drills_core::require_field;

/// Arguments for `drills get`
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Record to read from
    #[arg(short, long, value_enum, default_value_t = RecordKind::Person)]
    pub record: RecordKind,

    /// Field name
    pub key: String,
}

pub fn execute(args: GetArgs, ctx: &Context) -> CliResult<()> {
    let value = match args.record {
        RecordKind::Person => require_field(ctx.person(), &args.key)?,
        RecordKind::Member => require_field(ctx.member(), &args.key)?,
    };
    print_value(&value, &value, ctx.output)
}
