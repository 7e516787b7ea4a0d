//! Profile commands

use crate::commands::Context;
use crate::error::{CliError, CliResult};
use crate::output::print_value;
use clap::Subcommand;
use drills_core::{update_profile, Profile, ProfileUpdate};

/// Profile subcommands
#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// Apply a partial update to a profile and print the result
    Update {
        /// Original profile as JSON, e.g. '{"name":"Azad","age":25,"email":"azad@azad.com"}'
        #[arg(short, long)]
        profile: String,

        /// Partial update as JSON; individual flags below take precedence
        #[arg(short, long)]
        updates: Option<String>,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New age
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,

        /// New email
        #[arg(long)]
        email: Option<String>,
    },
}

/// Merge the JSON update (if any) with the individual flag overrides.
fn collect_update(
    updates: Option<&str>,
    name: Option<String>,
    age: Option<i64>,
    email: Option<String>,
) -> CliResult<ProfileUpdate> {
    let mut update = match updates {
        Some(json) => serde_json::from_str::<ProfileUpdate>(json)
            .map_err(|e| CliError::InvalidInput(format!("profile update: {}", e)))?,
        None => ProfileUpdate::new(),
    };
    if let Some(name) = name {
        update = update.with_name(name);
    }
    if let Some(age) = age {
        update = update.with_age(age);
    }
    if let Some(email) = email {
        update = update.with_email(email);
    }
    Ok(update)
}

pub fn execute(command: ProfileCommands, ctx: &Context) -> CliResult<()> {
    match command {
        ProfileCommands::Update {
            profile,
            updates,
            name,
            age,
            email,
        } => {
            let original = Profile::from_json(&profile)?;
            let update = collect_update(updates.as_deref(), name, age, email)?;
            let updated = update_profile(&original, update);
            let text = serde_json::to_string(&updated)?;
            print_value(&updated, text, ctx.output)
        }
    }
}
