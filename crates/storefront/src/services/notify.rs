//! Outbound notifications.
//!
//! Bookings, status changes, order confirmations and password resets all fan
//! out through one fire-and-forget seam. The shop never waits on or inspects
//! a delivery result; implementations own their failure handling.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lumina_core::AppointmentStatus;

use crate::models::{Appointment, Order, User};

/// What happened, carrying the full record it happened to.
#[derive(Debug, Clone)]
pub enum Notification {
    /// A new appointment was booked.
    AppointmentBooked(Appointment),
    /// An appointment's status actually changed (repeat writes of the same
    /// status never produce one of these).
    AppointmentStatusChanged {
        /// The appointment after the change.
        appointment: Appointment,
        /// Status before the change.
        previous: AppointmentStatus,
    },
    /// An order was placed.
    OrderConfirmation(Order),
    /// A password reset was requested for this account.
    PasswordReset(User),
}

impl Notification {
    /// Stable kind label, useful for log filtering.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AppointmentBooked(_) => "new-appointment",
            Self::AppointmentStatusChanged { .. } => "status-changed",
            Self::OrderConfirmation(_) => "order-confirmation",
            Self::PasswordReset(_) => "password-reset",
        }
    }

    /// Human-readable one-liner describing the event.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::AppointmentBooked(appointment) => format!(
                "appointment {} booked for {} on {} at {}",
                appointment.id, appointment.name, appointment.date, appointment.time
            ),
            Self::AppointmentStatusChanged {
                appointment,
                previous,
            } => format!(
                "appointment {} moved from {} to {}",
                appointment.id, previous, appointment.status
            ),
            Self::OrderConfirmation(order) => format!(
                "order {} confirmed for {}, {} item(s), total {}",
                order.id, order.customer_name, order.items, order.total
            ),
            Self::PasswordReset(user) => {
                format!("password reset requested for {}", user.email)
            }
        }
    }

    /// The address the notification would be sent to, when the record
    /// carries one.
    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        match self {
            Self::AppointmentBooked(appointment)
            | Self::AppointmentStatusChanged { appointment, .. } => {
                Some(appointment.email.as_str())
            }
            Self::PasswordReset(user) => Some(user.email.as_str()),
            Self::OrderConfirmation(_) => None,
        }
    }
}

/// One-way notification delivery.
pub trait Notifier: Send + Sync {
    /// Fire-and-forget: callers neither wait on nor inspect delivery.
    fn send(&self, notification: Notification);
}

/// Writes notifications to the log.
///
/// The default collaborator in a shop with no mail transport wired; the
/// structured log line is the outbox.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, notification: Notification) {
        tracing::info!(
            kind = notification.kind(),
            recipient = notification.recipient(),
            "{}",
            notification.summary()
        );
    }
}

/// Captures notifications instead of delivering them.
///
/// For tests and dry runs that need to assert on what would have gone out.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Number of notifications sent so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Kind labels of everything sent so far, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.lock().iter().map(Notification::kind).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, notification: Notification) {
        self.lock().push(notification);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use lumina_core::{OrderId, OrderStatus, Price};

    use super::*;
    use crate::models::Order;

    fn order() -> Order {
        Order {
            id: OrderId::new("ORDtest01"),
            customer_name: "Ada Lovelace".to_owned(),
            order_date: Utc::now(),
            status: OrderStatus::Pending,
            total: Price::from_cents(12_999),
            items: 2,
            details: None,
            shipping_address: None,
        }
    }

    #[test]
    fn test_order_confirmation_kind_and_recipient() {
        let notification = Notification::OrderConfirmation(order());
        assert_eq!(notification.kind(), "order-confirmation");
        assert_eq!(notification.recipient(), None);
        assert!(notification.summary().contains("ORDtest01"));
    }

    #[test]
    fn test_recording_notifier_captures_in_order() {
        let recorder = RecordingNotifier::new();
        assert_eq!(recorder.count(), 0);

        recorder.send(Notification::OrderConfirmation(order()));
        recorder.send(Notification::OrderConfirmation(order()));

        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.kinds(), vec!["order-confirmation"; 2]);
    }
}
