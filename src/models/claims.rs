//! JWT Claims model.

use serde::{Deserialize, Serialize};

use crate::constants::ROLE_ADMIN;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // account id
    pub email: String,
    pub role: String, // homeowner/tradie/admin
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

impl Claims {
    /// Check if the claims belong to an admin
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Check if the claims carry the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}
