//! Lumina storefront library.
//!
//! The storefront core as a library: six persisted collection stores
//! (products, brands, orders, appointments, users, cart) over pluggable
//! snapshot storage, plus the auth and checkout services that tie them
//! together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod config;
pub mod i18n;
pub mod models;
pub mod seed;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
pub mod stores;
