//! Area commands

use crate::commands::Context;
use crate::error::CliResult;
use crate::output::print_value;
use clap::Subcommand;
use drills_core::{calculate_shape_area, Shape};

/// Area subcommands
#[derive(Debug, Subcommand)]
pub enum AreaCommands {
    /// Area of a circle
    Circle {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },

    /// Area of a rectangle
    Rectangle {
        #[arg(allow_negative_numbers = true)]
        width: f64,
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },

    /// Area of a shape given as tagged JSON, e.g. '{"shape":"circle","radius":5}'
    Json {
        shape: String,
    },
}

impl AreaCommands {
    fn into_shape(self) -> CliResult<Shape> {
        Ok(match self {
            AreaCommands::Circle { radius } => Shape::circle(radius),
            AreaCommands::Rectangle { width, height } => Shape::rectangle(width, height),
            AreaCommands::Json { shape } => Shape::from_json(&shape)?,
        })
    }
}

pub fn execute(command: AreaCommands, ctx: &Context) -> CliResult<()> {
    let shape = command.into_shape()?;
    let area = calculate_shape_area(&shape);
    print_value(&area, area, ctx.output)
}
