//! Application state shared across the storefront.
//!
//! One [`AppState`] is built at startup and passed down explicitly to
//! whatever consumes the stores; nothing reaches for globals. Each store
//! opens its slot exactly once, here.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::seed;
use crate::services::auth::AuthService;
use crate::services::checkout::CheckoutService;
use crate::services::notify::{LogNotifier, Notifier};
use crate::session::Session;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::stores::{
    AppointmentBook, BrandRegistry, Cart, OrderBook, ProductCatalog, UserDirectory,
};

/// Application state shared across the whole process.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// six domain stores, the session pointer, and the notifier.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    products: ProductCatalog,
    brands: BrandRegistry,
    orders: OrderBook,
    appointments: AppointmentBook,
    users: UserDirectory,
    cart: Cart,
    session: Arc<Session>,
    notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Open every store under `config.data_dir`, with notifications going
    /// to the log.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_notifier(config, Arc::new(LogNotifier))
    }

    /// Open every store with a caller-supplied notifier.
    ///
    /// Collection slots live as JSON files under `config.data_dir`; the
    /// session pointer lives in memory and lasts for this process only,
    /// like a browser tab's session.
    #[must_use]
    pub fn with_notifier(config: StorefrontConfig, notifier: Arc<dyn Notifier>) -> Self {
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&config.data_dir));
        let session = Arc::new(Session::new(Arc::new(MemoryStorage::new())));

        let products = ProductCatalog::open(storage.clone(), seed::products());
        let brands = BrandRegistry::open(storage.clone(), seed::brands());
        let orders = OrderBook::open(storage.clone(), Vec::new());
        let appointments = AppointmentBook::open(storage.clone(), notifier.clone(), Vec::new());
        let users = UserDirectory::open(storage.clone(), session.clone(), seed::users());
        let cart = Cart::open(storage);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                brands,
                orders,
                appointments,
                users,
                cart,
                session,
                notifier,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn products(&self) -> &ProductCatalog {
        &self.inner.products
    }

    /// Get a reference to the brand registry.
    #[must_use]
    pub fn brands(&self) -> &BrandRegistry {
        &self.inner.brands
    }

    /// Get a reference to the order book.
    #[must_use]
    pub fn orders(&self) -> &OrderBook {
        &self.inner.orders
    }

    /// Get a reference to the appointment book.
    #[must_use]
    pub fn appointments(&self) -> &AppointmentBook {
        &self.inner.appointments
    }

    /// Get a reference to the account directory.
    #[must_use]
    pub fn users(&self) -> &UserDirectory {
        &self.inner.users
    }

    /// Get a reference to the cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.inner.cart
    }

    /// Get a reference to the session pointer.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get a reference to the notifier.
    #[must_use]
    pub fn notifier(&self) -> &dyn Notifier {
        self.inner.notifier.as_ref()
    }

    /// Build an authentication service over this state.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self.users(), self.session(), self.notifier())
    }

    /// Build a checkout service over this state.
    #[must_use]
    pub fn checkout(&self) -> CheckoutService<'_> {
        CheckoutService::new(self.cart(), self.orders(), self.notifier())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn config_in(dir: &TempDir) -> StorefrontConfig {
        StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        }
    }

    #[test]
    fn test_fresh_state_is_a_seeded_shop() {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(config_in(&dir));

        assert_eq!(state.products().len(), seed::products().len());
        assert_eq!(state.brands().len(), seed::brands().len());
        assert_eq!(state.users().len(), seed::users().len());
        assert!(state.orders().is_empty());
        assert!(state.appointments().is_empty());
        assert!(state.cart().is_empty());
        assert!(state.session().current_user().is_none());
    }

    #[test]
    fn test_catalog_changes_survive_a_reopen() {
        let dir = TempDir::new().unwrap();
        let before = seed::products().len();

        {
            let state = AppState::new(config_in(&dir));
            state
                .products()
                .create(crate::stores::NewProduct {
                    name: "Vista Shield".to_owned(),
                    price: lumina_core::Price::from_cents(17_999),
                    category: lumina_core::ProductCategory::Sunglasses,
                    image: "/images/products/vista.webp".to_owned(),
                    colors: vec!["Storm".to_owned()],
                    description: None,
                    tags: None,
                    ribbon: None,
                    brand_id: None,
                })
                .unwrap();
        }

        let reopened = AppState::new(config_in(&dir));
        assert_eq!(reopened.products().len(), before + 1);
        assert_eq!(reopened.products().list()[0].name, "Vista Shield");
    }

    #[test]
    fn test_session_does_not_outlive_the_process_state() {
        let dir = TempDir::new().unwrap();

        {
            let state = AppState::new(config_in(&dir));
            state
                .auth()
                .sign_in("demo@lumina.shop", "lumina-demo")
                .unwrap();
            assert!(state.session().current_user().is_some());
        }

        // a fresh process starts signed out even over the same data dir
        let reopened = AppState::new(config_in(&dir));
        assert!(reopened.session().current_user().is_none());
    }
}
