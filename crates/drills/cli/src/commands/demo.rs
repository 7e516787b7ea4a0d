//! Demo command: every exercise on its sample inputs

use std::fmt;

use crate::commands::Context;
use crate::error::CliResult;
use crate::output::{bracketed, print_value};
use drills_core::fields::{Age, IsAdmin, Name};
use drills_core::{
    calculate_shape_area, count_word_occurrences, get_property, remove_duplicates,
    update_profile, validate_keys, Area, FieldValue, Member, Profile, ProfileUpdate, Shape,
};
use serde::Serialize;

/// Results of running every exercise once.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub dedup: Vec<Vec<i64>>,
    pub word_counts: Vec<usize>,
    pub profiles: Vec<Profile>,
    pub key_checks: Vec<bool>,
    pub areas: Vec<Area>,
    pub properties: Vec<FieldValue>,
}

impl DemoReport {
    pub fn run(ctx: &Context) -> Self {
        let dedup = vec![
            remove_duplicates(&[1, 2, 3, 2, 4, 1, 5]),
            remove_duplicates(&[11, 13, 15, 1, 9, 19, 19, 20, 20, 22, 23]),
        ];

        let word_counts = vec![
            count_word_occurrences("I love typescript", "typescript"),
            count_word_occurrences("typescript is great, I love typescript", "typescript"),
        ];

        let profile = Profile::new("Azad", 25, "azad@azad.com");
        let profiles = vec![
            update_profile(
                &profile,
                ProfileUpdate::new().with_age(26).with_email("azad@azadddddd.com"),
            ),
            update_profile(&profile, ProfileUpdate::new().with_name("Azad")),
        ];

        let person = ctx.person();
        let key_checks = vec![
            validate_keys(person, ["name", "age", "email"]),
            validate_keys(person, ["name", "age", "address"]),
        ];

        let areas = vec![
            calculate_shape_area(&Shape::circle(5.0)),
            calculate_shape_area(&Shape::rectangle(10.0, 20.0)),
        ];

        let member: &Member = ctx.member();
        let properties = vec![
            FieldValue::Text(get_property(member, Name).clone()),
            FieldValue::Integer(*get_property(member, Age)),
            FieldValue::Boolean(*get_property(member, IsAdmin)),
        ];

        Self {
            dedup,
            word_counts,
            profiles,
            key_checks,
            areas,
            properties,
        }
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for values in &self.dedup {
            writeln!(f, "dedup: {}", bracketed(values))?;
        }
        for count in &self.word_counts {
            writeln!(f, "count: {}", count)?;
        }
        for profile in &self.profiles {
            writeln!(
                f,
                "profile: name={} age={} email={}",
                profile.name, profile.age, profile.email
            )?;
        }
        for valid in &self.key_checks {
            writeln!(f, "keys: {}", valid)?;
        }
        for area in &self.areas {
            writeln!(f, "area: {}", area)?;
        }
        let properties: Vec<String> = self.properties.iter().map(ToString::to_string).collect();
        write!(f, "get: {}", properties.join(", "))
    }
}

pub fn execute(ctx: &Context) -> CliResult<()> {
    let report = DemoReport::run(ctx);
    print_value(&report, &report, ctx.output)
}
