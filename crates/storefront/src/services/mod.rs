//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Account sign-up, sign-in, and profile management
//! - `checkout` - Order placement workflow across the cart and order book
//! - `notify` - Outbound notification fan-out

pub mod auth;
pub mod checkout;
pub mod notify;

pub use auth::{AuthError, AuthService};
pub use checkout::{CheckoutDetails, CheckoutError, CheckoutService, PlacedOrder};
pub use notify::{LogNotifier, Notification, Notifier, RecordingNotifier};
