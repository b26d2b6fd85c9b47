//! Storefront localization.
//!
//! A fixed set of locales, each with a static dictionary of UI strings.
//! Lookup never fails: a key missing from a locale falls back to English,
//! and a key missing everywhere comes back verbatim so the gap is visible
//! on screen instead of blanking the label.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A dictionary of UI strings for one locale.
pub type Lexicon = HashMap<&'static str, &'static str>;

/// The locales the storefront ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
    Es,
}

impl Locale {
    /// Every shipped locale.
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Es];

    /// The BCP 47 primary language subtag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    /// Match a language tag, ignoring case and any region subtag
    /// (`"en-US"` is English).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split('-').next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Like [`Self::from_tag`], but an unrecognized tag lands on English
    /// instead of failing. Suited to `Accept-Language` style input where
    /// anything is possible.
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unsupported locale: {s}"))
    }
}

static EN: LazyLock<Lexicon> = LazyLock::new(|| {
    HashMap::from([
        ("nav.home", "Home"),
        ("nav.products", "Shop"),
        ("nav.appointments", "Book an Eye Exam"),
        ("nav.account", "My Account"),
        ("nav.cart", "Cart"),
        ("cart.title", "Your Cart"),
        ("cart.empty", "Your cart is empty"),
        ("cart.subtotal", "Subtotal"),
        ("cart.shipping", "Shipping"),
        ("cart.total", "Total"),
        ("cart.checkout", "Checkout"),
        ("product.add_to_cart", "Add to Cart"),
        ("appointment.book", "Book Appointment"),
        ("appointment.booked", "Your appointment is booked"),
        ("account.sign_in", "Sign In"),
        ("account.sign_up", "Create Account"),
        ("account.sign_out", "Sign Out"),
        ("order.placed", "Thank you! Your order has been placed"),
    ])
});

static FR: LazyLock<Lexicon> = LazyLock::new(|| {
    HashMap::from([
        ("nav.home", "Accueil"),
        ("nav.products", "Boutique"),
        ("nav.appointments", "Prendre rendez-vous"),
        ("nav.account", "Mon compte"),
        ("nav.cart", "Panier"),
        ("cart.title", "Votre panier"),
        ("cart.empty", "Votre panier est vide"),
        ("cart.subtotal", "Sous-total"),
        ("cart.shipping", "Livraison"),
        ("cart.total", "Total"),
        ("cart.checkout", "Commander"),
        ("product.add_to_cart", "Ajouter au panier"),
        ("appointment.book", "Prendre rendez-vous"),
        ("appointment.booked", "Votre rendez-vous est confirm\u{e9}"),
        ("account.sign_in", "Se connecter"),
        ("account.sign_up", "Cr\u{e9}er un compte"),
        ("account.sign_out", "Se d\u{e9}connecter"),
        ("order.placed", "Merci ! Votre commande a \u{e9}t\u{e9} enregistr\u{e9}e"),
    ])
});

static ES: LazyLock<Lexicon> = LazyLock::new(|| {
    HashMap::from([
        ("nav.home", "Inicio"),
        ("nav.products", "Tienda"),
        ("nav.appointments", "Reservar examen visual"),
        ("nav.account", "Mi cuenta"),
        ("nav.cart", "Carrito"),
        ("cart.title", "Tu carrito"),
        ("cart.empty", "Tu carrito est\u{e1} vac\u{ed}o"),
        ("cart.subtotal", "Subtotal"),
        ("cart.shipping", "Env\u{ed}o"),
        ("cart.total", "Total"),
        ("cart.checkout", "Finalizar compra"),
        ("product.add_to_cart", "A\u{f1}adir al carrito"),
        ("appointment.book", "Reservar cita"),
        ("appointment.booked", "Tu cita est\u{e1} reservada"),
        ("account.sign_in", "Iniciar sesi\u{f3}n"),
        ("account.sign_up", "Crear cuenta"),
        ("account.sign_out", "Cerrar sesi\u{f3}n"),
        ("order.placed", "\u{a1}Gracias! Tu pedido ha sido registrado"),
    ])
});

/// The full dictionary for a locale, read-only.
#[must_use]
pub fn lexicon(locale: Locale) -> &'static Lexicon {
    match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
        Locale::Es => &ES,
    }
}

/// Look a UI string up, falling back to English and then to the key itself.
#[must_use]
pub fn translate(locale: Locale, key: &str) -> &str {
    if let Some(text) = lexicon(locale).get(key) {
        return text;
    }
    if let Some(text) = EN.get(key) {
        return text;
    }
    key
}
