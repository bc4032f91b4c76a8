//! Typed declarations read from the organization document
//!
//! Each entry of `repositories`, `users` and `teams` is deserialized into one
//! of these types before any resource is created for it.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

mod repo;
mod team;
mod user;

pub use repo::{RepositoryDecl, RepositoryTemplate};
pub use team::TeamDecl;
pub use user::UserDecl;

/// Deserialize an optional identifier written either as a string or a number.
///
/// GitHub identifiers such as team IDs are numeric, so documents often write
/// them unquoted.
pub(crate) fn opt_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(serde::de::Error::custom(
            "expected a string or number identifier",
        )),
    }
}
