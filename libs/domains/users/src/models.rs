use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// User entity.
///
/// `name` and `email` hold whatever JSON value the client sent. `None` means the
/// field was never supplied and is left out of responses, an explicit `null` is
/// kept and echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Identifier assigned on creation, never changes afterwards
    pub id: u64,
    /// Display name
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "John Doe")]
    pub name: Option<Value>,
    /// Contact email
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "johndoe@example.com")]
    pub email: Option<Value>,
}

/// DTO for creating a new user.
///
/// Fields are stored as-is, whatever their JSON type. Absent values stay absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CreateUser {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
}

/// DTO for updating an existing user.
///
/// A field that is absent or falsy (`""`, `0`, `false`, `null`) keeps the
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
}

/// Deserializes a present field as `Some`, including an explicit `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// `false` for `null`, `false`, `0` and `""`
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// How identifiers are assigned to new users
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdStrategy {
    /// `len + 1` at insertion time. Reuses ids after a deletion.
    #[default]
    Length,
    /// Monotonic counter, an id is never handed out twice.
    Sequence,
}

/// `GET /users` response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserList {
    pub users: Vec<User>,
}

/// `GET /users/{id}` response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}

impl User {
    pub fn new(id: u64, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
        }
    }

    /// Apply an update, skipping absent and falsy values
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name.filter(is_truthy) {
            self.name = Some(name);
        }
        if let Some(email) = update.email.filter(is_truthy) {
            self.email = Some(email);
        }
    }
}

/// Records the directory starts with
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: Some(Value::from("John Doe")),
            email: Some(Value::from("johndoe@example.com")),
        },
        User {
            id: 2,
            name: Some(Value::from("Jane Smith")),
            email: Some(Value::from("janesmith@example.com")),
        },
    ]
}
