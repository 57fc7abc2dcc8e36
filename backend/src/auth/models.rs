//! Data structures for authentication-related entities.
//!
//! This module defines the role labels recognized by the authorization gate
//! and the JWT claims carried by bearer tokens, used for data transfer and
//! internal representation within the authentication flow.

use serde::{Deserialize, Serialize};

/// Authorization label attached to an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// Claims carried by a bearer token minted by the external identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

impl Claims {
    /// Whether these claims meet `required`. Admins also satisfy user-level
    /// requirements.
    pub fn satisfies(&self, required: Role) -> bool {
        match required {
            Role::User => self.has(Role::User) || self.has(Role::Admin),
            Role::Admin => self.has(Role::Admin),
        }
    }

    fn has(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r == role.as_str())
    }
}
