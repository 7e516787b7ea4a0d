//! Command implementations

pub mod area;
pub mod count;
pub mod dedup;
pub mod demo;
pub mod get;
pub mod keys;
pub mod profile;

use crate::config::DrillsConfig;
use crate::output::OutputFormat;
use drills_core::{Member, Person};

/// Which sample record a command reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordKind {
    /// name, age, email
    #[default]
    Person,
    /// name, age, isAdmin
    Member,
}

/// Shared state handed to every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: DrillsConfig,
    pub output: OutputFormat,
}

impl Context {
    pub fn person(&self) -> &Person {
        &self.config.person
    }

    pub fn member(&self) -> &Member {
        &self.config.member
    }
}
