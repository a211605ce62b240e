//! User domain model

use serde::{Deserialize, Serialize};

use super::clock::Timestamp;
use super::id::UserId;

/// A person tasks are assigned to
///
/// Users are created once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address (format not checked)
    pub email: String,

    pub created_at: Timestamp,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_flat_fields() {
        let user = User::new(
            UserId::from("0a1b2c3d"),
            "Alice",
            "a@x.com",
            "2024-01-01 10:00:00".parse().unwrap(),
        );

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "0a1b2c3d",
                "name": "Alice",
                "email": "a@x.com",
                "created_at": "2024-01-01 10:00:00",
            })
        );
    }
}
