//! CLI command implementations.

pub mod admin;
pub mod inspect;
pub mod reset;
pub mod seed;

use clap::ValueEnum;

use lumina_storefront::storage::slots;

/// The collections a command can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Products,
    Brands,
    Orders,
    Appointments,
    Users,
    Cart,
}

impl Collection {
    /// The storage slot this collection persists to.
    #[must_use]
    pub const fn slot(self) -> &'static str {
        match self {
            Self::Products => slots::PRODUCTS,
            Self::Brands => slots::BRANDS,
            Self::Orders => slots::ORDERS,
            Self::Appointments => slots::APPOINTMENTS,
            Self::Users => slots::USERS,
            Self::Cart => slots::CART,
        }
    }
}
