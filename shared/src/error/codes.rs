//! Unified error codes for the backend and the admin frontend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Branch errors
//! - 4xxx: Table errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Superuser scope required
    SuperuserRequired = 2002,
    /// Operator has no assigned branch
    NoBranchAssigned = 2003,

    // ==================== 3xxx: Branch ====================
    /// Branch not found
    BranchNotFound = 3001,
    /// Branch slug already in use
    SlugTaken = 3002,
    /// Link type key is not part of the catalog
    UnknownLinkType = 3003,
    /// Duplicate key in link ordering
    DuplicateLinkOrder = 3004,

    // ==================== 4xxx: Table ====================
    /// Table not found
    TableNotFound = 4001,
    /// Table number already exists within the branch
    TableNumberConflict = 4002,
    /// Invalid table number range
    InvalidTableRange = 4003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Data integrity violation (inconsistent store)
    DataIntegrity = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid username or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::AccountDisabled => "Account has been disabled",

            Self::PermissionDenied => "Permission denied",
            Self::SuperuserRequired => "Superuser scope required",
            Self::NoBranchAssigned => "Operator is not assigned to a branch",

            Self::BranchNotFound => "Branch not found",
            Self::SlugTaken => "Branch slug already in use",
            Self::UnknownLinkType => "Unknown link type key",
            Self::DuplicateLinkOrder => "Duplicate key in link order",

            Self::TableNotFound => "Table not found",
            Self::TableNumberConflict => "Table number already exists in this branch",
            Self::InvalidTableRange => "Invalid start or end table number",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::DataIntegrity => "Data integrity violation",
        }
    }

    /// Get the HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::UnknownLinkType
            | Self::DuplicateLinkOrder
            | Self::InvalidTableRange => StatusCode::BAD_REQUEST,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            Self::PermissionDenied
            | Self::SuperuserRequired
            | Self::NoBranchAssigned
            | Self::AccountDisabled => StatusCode::FORBIDDEN,

            Self::NotFound | Self::BranchNotFound | Self::TableNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::SlugTaken | Self::TableNumberConflict => {
                StatusCode::CONFLICT
            }

            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::DataIntegrity => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 value does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1005 => Self::AccountDisabled,

            2001 => Self::PermissionDenied,
            2002 => Self::SuperuserRequired,
            2003 => Self::NoBranchAssigned,

            3001 => Self::BranchNotFound,
            3002 => Self::SlugTaken,
            3003 => Self::UnknownLinkType,
            3004 => Self::DuplicateLinkOrder,

            4001 => Self::TableNotFound,
            4002 => Self::TableNumberConflict,
            4003 => Self::InvalidTableRange,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::DataIntegrity,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::NotAuthenticated,
            ErrorCode::TokenExpired,
            ErrorCode::PermissionDenied,
            ErrorCode::BranchNotFound,
            ErrorCode::TableNumberConflict,
            ErrorCode::DataIntegrity,
        ] {
            let value = code.code();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(777), Err(InvalidErrorCode(777)));
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            ErrorCode::TableNumberConflict.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ErrorCode::DataIntegrity.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::InvalidTableRange.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::TableNotFound).unwrap();
        assert_eq!(json, "4001");

        let code: ErrorCode = serde_json::from_str("1003").unwrap();
        assert_eq!(code, ErrorCode::TokenExpired);
    }
}
