//! Authentication and authorization helper functions.
//!
//! These helpers reduce boilerplate in handlers by providing common patterns for:
//! - Extracting claims from authenticated requests
//! - Requiring a particular account role

use actix_web::HttpRequest;
use log::warn;

use crate::constants::{CODE_AUTH_REQUIRED, CODE_FORBIDDEN, ERR_AUTH_REQUIRED};
use crate::errors::ApiError;
use crate::models::Claims;

use super::RequestExt;

/// Extract claims from request or return Unauthorized error.
///
/// Use this at the start of any handler that requires authentication.
///
/// # Example
/// ```ignore
/// let claims = require_auth(&req)?;
/// ```
pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Failed to get claims from request");
        ApiError::unauthorized(CODE_AUTH_REQUIRED, ERR_AUTH_REQUIRED)
    })
}

/// Require the given role or return Forbidden. Admins pass every role check.
///
/// # Example
/// ```ignore
/// let claims = require_auth(&req)?;
/// require_role(&claims, ROLE_HOMEOWNER, ERR_HOMEOWNERS_ONLY)?;
/// ```
pub fn require_role(claims: &Claims, role: &str, denied_msg: &str) -> Result<(), ApiError> {
    if !claims.has_role(role) && !claims.is_admin() {
        warn!(
            "Account {} (role: {}) attempted {} action",
            claims.sub, claims.role, role
        );
        return Err(ApiError::forbidden(CODE_FORBIDDEN, denied_msg));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ROLE_ADMIN, ROLE_HOMEOWNER, ROLE_TRADIE};
    use actix_web::test::TestRequest;
    use actix_web::HttpMessage;

    fn claims(role: &str) -> Claims {
        Claims {
            sub: "abc".to_string(),
            email: "someone@example.com".to_string(),
            role: role.to_string(),
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_require_role() {
        assert!(require_role(&claims(ROLE_HOMEOWNER), ROLE_HOMEOWNER, "no").is_ok());
        assert!(require_role(&claims(ROLE_ADMIN), ROLE_HOMEOWNER, "no").is_ok());

        let err = require_role(&claims(ROLE_TRADIE), ROLE_HOMEOWNER, "no").unwrap_err();
        assert_eq!(err.code(), CODE_FORBIDDEN);
    }

    #[test]
    fn test_require_auth() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(require_auth(&req).unwrap_err().code(), CODE_AUTH_REQUIRED);

        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims(ROLE_HOMEOWNER));
        assert_eq!(require_auth(&req).unwrap().role, ROLE_HOMEOWNER);
    }
}
