use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A booked appointment. Created only after the confirmation SMS went out,
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub name: String,
    pub treatment: String,
    pub number: String,
    pub appointment_at: NaiveDateTime,
    pub reminder_at: NaiveDateTime,
}

/// Raw form input for a booking attempt, one per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub treatment: String,
    pub number: String,
    pub date: String,
    pub time: String,
}
