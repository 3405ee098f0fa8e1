//! Authentication and authorization
//!
//! JWT token handling, Argon2 password hashing, the request middleware
//! that injects [`CurrentUser`], and branch scope checks.

pub mod jwt;
pub mod middleware;
pub mod password;
pub mod scope;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_superuser};
pub use scope::{require_branch_access, scoped_branch_id};
