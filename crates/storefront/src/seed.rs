//! Built-in seed data.
//!
//! Stores fall back to these collections when their slot is absent or
//! unreadable, so a fresh install comes up as a working shop instead of an
//! empty one. Orders, appointments, and the cart start empty and need no
//! seed of their own.

use lumina_core::{BrandId, Email, Price, ProductCategory, ProductId, Role, UserId};

use crate::models::{Brand, Product, User};

/// A lens choice offered on the product page. The add-on is folded into the
/// cart line's unit price at the moment the line is added.
#[derive(Debug, Clone, Copy)]
pub struct LensOption {
    pub label: &'static str,
    pub add_on: Price,
}

/// The lens choices offered with every frame.
#[must_use]
pub fn lens_options() -> Vec<LensOption> {
    vec![
        LensOption {
            label: "Standard",
            add_on: Price::ZERO,
        },
        LensOption {
            label: "Blue Light",
            add_on: Price::from_cents(3_000),
        },
        LensOption {
            label: "Polarized",
            add_on: Price::from_cents(5_000),
        },
        LensOption {
            label: "Progressive",
            add_on: Price::from_cents(12_000),
        },
    ]
}

/// The starter catalog, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "PRDaur01",
            "Aurora Aviator",
            12_999,
            ProductCategory::Sunglasses,
            &["Gold", "Black", "Silver"],
            4.8,
            124,
            Some("Best Seller"),
            Some("lumina-optics"),
            "A classic teardrop aviator with a lightweight titanium frame.",
        ),
        product(
            "PRDsol02",
            "Solstice Wayfarer",
            9_999,
            ProductCategory::Sunglasses,
            &["Tortoise", "Black"],
            4.6,
            89,
            Some("New"),
            Some("solace"),
            "A bold acetate wayfarer that works from beach to boardroom.",
        ),
        product(
            "PRDmer03",
            "Meridian Round",
            14_999,
            ProductCategory::Eyeglasses,
            &["Gunmetal", "Rose Gold"],
            4.7,
            56,
            None,
            Some("veridian"),
            "Thin metal rounds with adjustable nose pads for all-day wear.",
        ),
        product(
            "PRDcas04",
            "Cascade Clubmaster",
            11_999,
            ProductCategory::Sunglasses,
            &["Black & Gold", "Tortoise"],
            4.5,
            73,
            None,
            Some("solace"),
            "The browline silhouette, rebuilt with spring hinges.",
        ),
        product(
            "PRDatl05",
            "Atlas Rectangle",
            8_999,
            ProductCategory::Eyeglasses,
            &["Matte Black", "Navy"],
            4.3,
            41,
            None,
            Some("north-gaze"),
            "A no-nonsense rectangular frame for narrow to medium faces.",
        ),
        product(
            "PRDlun06",
            "Luna Cat-Eye",
            13_999,
            ProductCategory::Eyeglasses,
            &["Blush", "Onyx"],
            4.9,
            112,
            Some("Trending"),
            Some("lumina-optics"),
            "An upswept cat-eye in translucent acetate.",
        ),
        product(
            "PRDdri07",
            "Drift Sport Wrap",
            15_999,
            ProductCategory::Sunglasses,
            &["Carbon", "Volt"],
            4.4,
            37,
            None,
            Some("north-gaze"),
            "A wrap-around sport frame with rubberized temple grips.",
        ),
        product(
            "PRDhav08",
            "Haven Oversized",
            13_499,
            ProductCategory::Sunglasses,
            &["Amber", "Jet"],
            4.6,
            64,
            None,
            Some("veridian"),
            "Oversized squared lenses with full UV400 coverage.",
        ),
    ]
}

/// The starter brand roster.
#[must_use]
pub fn brands() -> Vec<Brand> {
    vec![
        brand("Lumina Optics", "/logos/lumina-optics.svg"),
        brand("Solace", "/logos/solace.svg"),
        brand("Veridian", "/logos/veridian.svg"),
        brand("North Gaze", "/logos/north-gaze.svg"),
    ]
}

/// The starter accounts: one admin and one demo shopper.
///
/// Passwords are stored in plain text like every other account; these are
/// demo credentials, not secrets.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        user(
            "USRadm01",
            "admin@lumina.shop",
            "lumina-admin",
            "Store",
            "Manager",
            Role::Admin,
        ),
        user(
            "USRdemo2",
            "demo@lumina.shop",
            "lumina-demo",
            "Demo",
            "Shopper",
            Role::Customer,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    cents: i64,
    category: ProductCategory,
    colors: &[&str],
    rating: f32,
    reviews: u32,
    ribbon: Option<&str>,
    brand: Option<&str>,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        category,
        image: format!("/images/products/{id}.webp"),
        colors: colors.iter().map(|&c| c.to_owned()).collect(),
        rating,
        reviews,
        description: Some(description.to_owned()),
        tags: None,
        ribbon: ribbon.map(str::to_owned),
        brand_id: brand.map(BrandId::new),
    }
}

fn brand(name: &str, logo: &str) -> Brand {
    Brand {
        id: BrandId::from_name(name),
        name: name.to_owned(),
        logo: logo.to_owned(),
    }
}

fn user(id: &str, email: &str, password: &str, first: &str, last: &str, role: Role) -> User {
    User {
        id: UserId::new(id),
        email: Email::parse(email).expect("seed email is valid"),
        password: password.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        phone: String::new(),
        address: String::new(),
        city: String::new(),
        zip: String::new(),
        gender: String::new(),
        role,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_product_brands_exist_in_seed_roster() {
        let roster: Vec<BrandId> = brands().into_iter().map(|b| b.id).collect();
        for product in products() {
            let brand_id = product.brand_id.unwrap();
            assert!(roster.contains(&brand_id), "unknown brand {brand_id}");
        }
    }

    #[test]
    fn test_seed_ids_are_unique_and_prefixed() {
        let catalog = products();
        for product in &catalog {
            assert!(product.id.as_str().starts_with("PRD"));
        }
        let mut ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_seed_has_one_admin() {
        let admins: Vec<_> = users()
            .into_iter()
            .filter(|u| u.role == Role::Admin)
            .collect();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].email.as_str(), "admin@lumina.shop");
    }

    #[test]
    fn test_standard_lens_is_free_and_first() {
        let options = lens_options();
        assert_eq!(options[0].label, "Standard");
        assert_eq!(options[0].add_on, Price::ZERO);
        assert!(options.len() > 1);
    }
}
