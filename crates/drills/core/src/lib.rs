//! # drills-core
//!
//! Six small, independent exercises over sequences, text, records and shapes.
//!
//! ## Components
//!
//! - **sequence**: order-preserving deduplication
//! - **text**: case-insensitive whole-word counting
//! - **profile**: immutable profile records with shallow-merge updates
//! - **record**: key validation and typed property access over records with
//!   a statically known field set
//! - **shape**: area calculation over a tagged shape union, with an explicit
//!   unknown-shape result
//!
//! Every operation is a pure function of its arguments.

#![deny(unsafe_code)]

pub mod error;
pub mod profile;
pub mod record;
pub mod sequence;
pub mod shape;
pub mod text;

pub use error::{DrillError, DrillResult};
pub use profile::{update_profile, Profile, ProfileUpdate};
pub use record::{
    fields, get_property, require_field, validate_keys, Field, FieldValue, Member, Person, Record,
};
pub use sequence::{
    remove_duplicate_numbers, remove_duplicate_numbers_hashed, remove_duplicates,
    remove_duplicates_by, remove_duplicates_hashed, same_value_zero,
};
pub use shape::{calculate_shape_area, Area, Shape, UNKNOWN_SHAPE};
pub use text::count_word_occurrences;
