//! Reservation Model (public form submission)

use serde::{Deserialize, Serialize};

/// Lifecycle of a reservation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A table reservation request submitted from the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// "YYYY-MM-DD"
    pub reservation_date: String,
    /// "HH:MM"
    pub reservation_time: String,
    pub guest_count: i64,
    /// Branch slug the guest picked on the form
    pub branch_key: String,
    pub message: Option<String>,
    pub consent: bool,
    pub status: ReservationStatus,
    /// Unix millis
    pub received_at: i64,
}

/// Public submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub guest_count: i64,
    pub branch_key: String,
    pub message: Option<String>,
    pub consent: bool,
}

/// Admin status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationStatusUpdate {
    pub status: ReservationStatus,
}
