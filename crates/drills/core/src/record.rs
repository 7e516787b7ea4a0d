//! Records with a statically known field set.
//!
//! Key validation and property access are expressed against the [`Record`]
//! trait instead of runtime reflection. Each record enumerates its field
//! names once; typed access goes through [`Field`] markers so a missing key
//! is a compile error rather than an undefined value.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DrillError, DrillResult};

/// A value read from a record field through the dynamic lookup path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

/// A record type whose field names are known at compile time.
pub trait Record {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Every field name, in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Look up a field by name. `None` if `key` is not in [`Self::FIELD_NAMES`].
    fn field(&self, key: &str) -> Option<FieldValue>;

    /// Whether `key` names a field of this record.
    fn has_field(&self, key: &str) -> bool {
        Self::FIELD_NAMES.contains(&key)
    }
}

/// A typed key into record `R`.
pub trait Field<R> {
    const KEY: &'static str;
    type Value;

    fn get(record: &R) -> &Self::Value;
}

/// Check that every candidate key is a field of `record`.
///
/// Stops at the first absent key. An empty key list is vacuously valid.
pub fn validate_keys<R, I, K>(record: &R, keys: I) -> bool
where
    R: Record,
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    for key in keys {
        let key = key.as_ref();
        if !record.has_field(key) {
            debug!(record = R::NAME, key, "Key not present on record");
            return false;
        }
    }
    true
}

/// Return the value stored under the typed key `F`, with its type preserved.
pub fn get_property<R, F>(record: &R, _field: F) -> &F::Value
where
    F: Field<R>,
{
    F::get(record)
}

/// Dynamic lookup that reports an unknown key as an error.
pub fn require_field<R: Record>(record: &R, key: &str) -> DrillResult<FieldValue> {
    record.field(key).ok_or_else(|| {
        warn!(record = R::NAME, key, "Unknown field requested");
        DrillError::UnknownField {
            record: R::NAME,
            key: key.to_string(),
            expected: R::FIELD_NAMES.join(", "),
        }
    })
}

/// Typed field keys shared by the sample records.
pub mod fields {
    #[derive(Clone, Copy, Debug)]
    pub struct Name;

    #[derive(Clone, Copy, Debug)]
    pub struct Age;

    #[derive(Clone, Copy, Debug)]
    pub struct Email;

    #[derive(Clone, Copy, Debug)]
    pub struct IsAdmin;
}

/// A person with contact details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new("Azad", 30, "azad@azad.com")
    }
}

impl Record for Person {
    const NAME: &'static str = "person";
    const FIELD_NAMES: &'static [&'static str] = &["name", "age", "email"];

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "name" => Some(self.name.as_str().into()),
            "age" => Some(self.age.into()),
            "email" => Some(self.email.as_str().into()),
            _ => None,
        }
    }
}

/// A person with an admin flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub age: i64,
    pub is_admin: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, age: i64, is_admin: bool) -> Self {
        Self {
            name: name.into(),
            age,
            is_admin,
        }
    }
}

impl Default for Member {
    fn default() -> Self {
        Self::new("Azad", 30, true)
    }
}

impl Record for Member {
    const NAME: &'static str = "member";
    const FIELD_NAMES: &'static [&'static str] = &["name", "age", "isAdmin"];

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "name" => Some(self.name.as_str().into()),
            "age" => Some(self.age.into()),
            "isAdmin" => Some(self.is_admin.into()),
            _ => None,
        }
    }
}

impl Field<Person> for fields::Name {
    const KEY: &'static str = "name";
    type Value = String;

    fn get(record: &Person) -> &String {
        &record.name
    }
}

impl Field<Person> for fields::Age {
    const KEY: &'static str = "age";
    type Value = i64;

    fn get(record: &Person) -> &i64 {
        &record.age
    }
}

impl Field<Person> for fields::Email {
    const KEY: &'static str = "email";
    type Value = String;

    fn get(record: &Person) -> &String {
        &record.email
    }
}

impl Field<Member> for fields::Name {
    const KEY: &'static str = "name";
    type Value = String;

    fn get(record: &Member) -> &String {
        &record.name
    }
}

impl Field<Member> for fields::Age {
    const KEY: &'static str = "age";
    type Value = i64;

    fn get(record: &Member) -> &i64 {
        &record.age
    }
}

impl Field<Member> for fields::IsAdmin {
    const KEY: &'static str = "isAdmin";
    type Value = bool;

    fn get(record: &Member) -> &bool {
        &record.is_admin
    }
}
