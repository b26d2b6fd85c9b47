//! Domain models for the storefront.
//!
//! One file per collection. Every record type implements
//! [`Record`](crate::collection::Record) so it can live in a
//! [`CollectionStore`](crate::collection::CollectionStore); snapshot field
//! names serialize in camelCase.

pub mod appointment;
pub mod brand;
pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use appointment::Appointment;
pub use brand::Brand;
pub use cart::{CartItem, CartKey};
pub use order::Order;
pub use product::Product;
pub use session::CurrentUser;
pub use user::{User, UserProfilePatch};
