//! Operator (admin user) Model

use serde::{Deserialize, Serialize};

/// Back-office operator account
///
/// `branch_id == None` together with `is_superuser` marks a chain-wide
/// administrator. Regular operators are pinned to a single branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Operator {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2 hash, never serialized out
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub branch_id: Option<i64>,
}

/// Create operator payload (superuser only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    pub branch_id: Option<i64>,
}

fn default_true() -> bool {
    true
}

/// Update operator payload; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    /// Wrapped twice so "unassign from branch" (explicit null) is
    /// distinguishable from "leave unchanged" (absent)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_double_option"
    )]
    pub branch_id: Option<Option<i64>>,
}

fn deserialize_double_option<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_hides_password_hash() {
        let op = Operator {
            id: 1,
            username: "admin".into(),
            email: "admin@example.com".into(),
            hashed_password: "$argon2id$...".into(),
            is_active: true,
            is_superuser: true,
            branch_id: None,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn test_update_branch_id_tristate() {
        let unchanged: OperatorUpdate = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(unchanged.branch_id, None);

        let cleared: OperatorUpdate = serde_json::from_str(r#"{"branch_id": null}"#).unwrap();
        assert_eq!(cleared.branch_id, Some(None));

        let assigned: OperatorUpdate = serde_json::from_str(r#"{"branch_id": 3}"#).unwrap();
        assert_eq!(assigned.branch_id, Some(Some(3)));
    }
}
