use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Access profile of an administrator. Closed set: roles outside this enum
/// cannot be persisted or embedded in tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::Admin, Role::Editor];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Editor" => Ok(Role::Editor),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// An identity record. The password is only ever stored as a bcrypt hash.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Administrator {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub profile: Role,
}

/// Fields for inserting a new administrator.
#[derive(Debug, Clone)]
pub struct NewAdministrator {
    pub email: String,
    pub password_hash: String,
    pub profile: Role,
}

/// A registered vehicle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

/// Mutable vehicle fields, used for both insert and full overwrite on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub name: String,
    pub brand: String,
    pub year: i32,
}
