//! Role names carried in the `role` claim of bearer tokens.

pub const ROLE_HOMEOWNER: &str = "homeowner";
pub const ROLE_TRADIE: &str = "tradie";
pub const ROLE_ADMIN: &str = "admin";
