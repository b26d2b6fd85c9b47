//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Every generated id
//! is a short tagged token (`"ORD"` + 6 random alphanumerics), readable in
//! storage snapshots and log lines alike.

use serde::{Deserialize, Serialize};

/// Length of the random token that follows an id's type tag.
pub const ID_TOKEN_LEN: usize = 6;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - A `TAG` constant naming the type's id prefix
/// - `new()` / `as_str()` / `into_inner()` accessors
/// - `generate()`, producing `TAG` followed by a random alphanumeric token
/// - `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use lumina_core::define_id;
/// define_id!(TicketId, "TKT");
///
/// let id = TicketId::generate();
/// assert!(id.as_str().starts_with("TKT"));
///
/// // Distinct id types never mix, so this won't compile:
/// // define_id!(ShelfId, "SHL");
/// // let _: TicketId = ShelfId::generate();
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $tag:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Type tag prefixed to every generated id of this kind.
            pub const TAG: &'static str = $tag;

            /// Create an ID from an existing string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh id: the type tag followed by a random
            /// alphanumeric token.
            #[must_use]
            pub fn generate() -> Self {
                use ::rand::Rng as _;

                let token: String = ::rand::rng()
                    .sample_iter(::rand::distr::Alphanumeric)
                    .take($crate::types::id::ID_TOKEN_LEN)
                    .map(char::from)
                    .collect();
                Self(format!("{}{token}", Self::TAG))
            }

            /// Get the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId, "PRD");
define_id!(OrderId, "ORD");
define_id!(AppointmentId, "APT");
define_id!(UserId, "USR");

/// A brand id, derived deterministically from the brand name.
///
/// Unlike the generated ids above, brand ids are slugs: the name lowercased
/// with whitespace runs collapsed to single hyphens. `"Ray Ban"` and
/// `"ray ban"` therefore collide, which is what makes duplicate detection
/// by name work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandId(String);

impl BrandId {
    /// Create a brand id from an existing slug value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the id slug from a brand name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let slug = name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self(slug)
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id and return its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for BrandId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BrandId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<BrandId> for String {
    fn from(id: BrandId) -> Self {
        id.0
    }
}

impl AsRef<str> for BrandId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
