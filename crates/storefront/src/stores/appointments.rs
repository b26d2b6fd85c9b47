//! Eye-exam appointment book.
//!
//! Bookings pick one of the fixed daily time slots. Every new booking and
//! every real status change fans out through the notifier; writing the same
//! status twice stays silent.

use std::sync::Arc;

use chrono::NaiveDate;
use lumina_core::{AppointmentId, AppointmentStatus, Email};
use thiserror::Error;

use crate::collection::{CollectionStore, Commit, Placement, StoreError};
use crate::models::Appointment;
use crate::services::notify::{Notification, Notifier};
use crate::storage::{Storage, slots};

/// The time slots offered for eye exams, as shown on the booking form.
pub const TIME_SLOTS: [&str; 8] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM",
];

/// Fields supplied on the booking form.
#[derive(Debug, Clone)]
pub struct AppointmentRequest {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
}

/// Errors from booking operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// The requested time is not one of [`TIME_SLOTS`].
    #[error("unknown time slot: {0}")]
    UnknownTimeSlot(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The appointment collection plus its notification rules.
pub struct AppointmentBook {
    store: CollectionStore<Appointment>,
    notifier: Arc<dyn Notifier>,
}

impl AppointmentBook {
    /// Open the book over the `appointments` slot, seeding it when the slot
    /// is absent or unreadable.
    #[must_use]
    pub fn open(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
        seed: Vec<Appointment>,
    ) -> Self {
        Self {
            store: CollectionStore::open(storage, slots::APPOINTMENTS, Placement::Front, seed),
            notifier,
        }
    }

    /// Every appointment, most recently booked first.
    #[must_use]
    pub fn list(&self) -> Vec<Appointment> {
        self.store.list()
    }

    /// Number of appointments on the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the book is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up a single appointment.
    #[must_use]
    pub fn find(&self, id: &AppointmentId) -> Option<Appointment> {
        self.store.find(id)
    }

    /// Book an appointment in one of the offered slots.
    ///
    /// The booking enters as `Pending` and a confirmation notification goes
    /// out to the visitor.
    pub fn book(&self, request: AppointmentRequest) -> Result<Commit<Appointment>, BookingError> {
        if !TIME_SLOTS.contains(&request.time.as_str()) {
            return Err(BookingError::UnknownTimeSlot(request.time));
        }

        let id = super::unique_id(&self.store, AppointmentId::generate);
        let appointment = Appointment {
            id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            date: request.date,
            time: request.time,
            status: AppointmentStatus::Pending,
        };
        let commit = self.store.insert(appointment)?;
        self.notifier
            .send(Notification::AppointmentBooked(commit.value.clone()));
        Ok(commit)
    }

    /// Move an appointment to a new status.
    ///
    /// A notification goes out only when the status actually changes.
    pub fn set_status(
        &self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<Commit<Appointment>, StoreError> {
        let mut previous = None;
        let commit = self.store.update(id, |appointment| {
            if appointment.status != status {
                previous = Some(appointment.status);
                appointment.status = status;
            }
        })?;

        if let Some(previous) = previous {
            self.notifier.send(Notification::AppointmentStatusChanged {
                appointment: commit.value.clone(),
                previous,
            });
        }
        Ok(commit)
    }

    /// Appointments on one calendar day, most recently booked first.
    #[must_use]
    pub fn by_date(&self, date: NaiveDate) -> Vec<Appointment> {
        let mut appointments = self.store.list();
        appointments.retain(|appointment| appointment.date == date);
        appointments
    }

    /// Appointments currently in one status, most recently booked first.
    #[must_use]
    pub fn by_status(&self, status: AppointmentStatus) -> Vec<Appointment> {
        let mut appointments = self.store.list();
        appointments.retain(|appointment| appointment.status == status);
        appointments
    }

    /// Observe every change to the book.
    pub fn subscribe(&self, subscriber: impl Fn(&[Appointment]) + Send + 'static) {
        self.store.subscribe(subscriber);
    }
}
