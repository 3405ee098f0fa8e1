//! Job Application Model (public form submission)

use serde::{Deserialize, Serialize};

/// A job application submitted from the public careers form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Application {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// "YYYY-MM-DD"
    pub birthdate: String,
    /// Branch slug the applicant applied to
    pub branch_key: String,
    pub department: String,
    pub experience_years: i64,
    pub message: Option<String>,
    pub privacy_policy_accepted: bool,
    /// Where the uploaded CV was stored
    pub cv_url: String,
    /// Unix millis
    pub submitted_at: i64,
}

/// Public submission payload (CV upload handled separately)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birthdate: String,
    pub branch_key: String,
    pub department: String,
    pub experience_years: i64,
    pub message: Option<String>,
    pub privacy_policy_accepted: bool,
    pub cv_url: String,
}
