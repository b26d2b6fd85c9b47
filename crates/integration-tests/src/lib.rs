//! Integration tests for Lumina.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lumina-integration-tests
//! ```
//!
//! Every suite builds real stores over a throwaway data directory; no
//! external services are involved.
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart pricing and the order placement workflow
//! - `store_persistence` - Seed fallback, snapshot overwrite, restart survival
//! - `booking_and_accounts` - Appointments, notifications, and account rules

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tempfile::TempDir;

use lumina_storefront::config::StorefrontConfig;
use lumina_storefront::services::notify::RecordingNotifier;
use lumina_storefront::state::AppState;

/// A complete shop over a throwaway data directory, with a recording
/// notifier so suites can assert on what went out.
pub struct TestShop {
    pub state: AppState,
    pub notifier: Arc<RecordingNotifier>,
    dir: TempDir,
}

impl TestShop {
    /// Open a fresh shop in a new temporary directory.
    #[must_use]
    pub fn open() -> Self {
        let dir = TempDir::new().expect("create temp data dir");
        Self::open_in(dir)
    }

    /// Drop the running shop and open a new one over the same directory,
    /// like a process restart. The notifier starts empty again.
    #[must_use]
    pub fn reopen(self) -> Self {
        let Self {
            state,
            notifier: _,
            dir,
        } = self;
        drop(state);
        Self::open_in(dir)
    }

    /// Path of the JSON file backing one slot.
    #[must_use]
    pub fn slot_file(&self, slot: &str) -> std::path::PathBuf {
        self.dir.path().join(format!("{slot}.json"))
    }

    fn open_in(dir: TempDir) -> Self {
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        let notifier = Arc::new(RecordingNotifier::new());
        let state = AppState::with_notifier(config, notifier.clone());
        Self {
            state,
            notifier,
            dir,
        }
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::open()
    }
}
