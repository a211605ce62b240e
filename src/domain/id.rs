//! Short opaque identifiers for users and tasks
//!
//! ID Format: the first 8 hex characters of a random v4 UUID
//! (e.g., `3f9a1c0e`). Collisions are possible in principle; the
//! [`Store`](super::Store) regenerates on a clash so inserts never
//! overwrite an existing entity.
//!
//! Ids read back from disk or typed on the command line are not
//! format-checked. An id that does not name anything is a lookup miss,
//! not a parse error.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Length of a generated identifier
pub const ID_LEN: usize = 8;

/// Generates an 8-character lowercase hex identifier
pub fn generate_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    simple[..ID_LEN].to_string()
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a fresh random identifier
            pub fn generate() -> Self {
                Self(generate_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier of a [`User`](super::User)
    UserId
}

string_id! {
    /// Identifier of a [`Task`](super::Task)
    TaskId
}
