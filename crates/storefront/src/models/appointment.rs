//! Eye-exam appointment domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lumina_core::{AppointmentId, AppointmentStatus, Email};

use crate::collection::Record;

/// A booked eye-exam appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique appointment ID.
    pub id: AppointmentId,
    /// Visitor's name.
    pub name: String,
    /// Address confirmations are sent to.
    pub email: Email,
    /// Contact phone number.
    pub phone: String,
    /// Requested calendar date.
    pub date: NaiveDate,
    /// Requested time slot, one of the labels in
    /// [`TIME_SLOTS`](crate::stores::appointments::TIME_SLOTS).
    pub time: String,
    /// Confirmation status.
    pub status: AppointmentStatus,
}

impl Record for Appointment {
    type Key = AppointmentId;

    fn key(&self) -> AppointmentId {
        self.id.clone()
    }
}
