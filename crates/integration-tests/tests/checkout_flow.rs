//! Integration tests for cart pricing and the checkout workflow.
//!
//! Each test runs a complete shop over a throwaway data directory; no
//! external services are required.
//!
//! Run with: cargo test -p lumina-integration-tests

use lumina_core::{OrderStatus, Price, ProductCategory};
use lumina_integration_tests::TestShop;
use lumina_storefront::models::CartItem;
use lumina_storefront::seed;
use lumina_storefront::services::checkout::{CheckoutDetails, CheckoutError};
use lumina_storefront::stores::NewProduct;

/// Test helper: build a cart line for a seeded frame with a chosen lens,
/// folding the lens add-on into the unit price the way the product page does.
fn seed_frame_line(shop: &TestShop, product_id: &str, color: &str, lens: &str) -> CartItem {
    let product = shop
        .state
        .products()
        .list()
        .into_iter()
        .find(|p| p.id.as_str() == product_id)
        .expect("seeded product exists");
    let option = seed::lens_options()
        .into_iter()
        .find(|o| o.label == lens)
        .expect("lens option exists");

    CartItem {
        product_id: product.id,
        name: product.name,
        image: product.image,
        price: product.price + option.add_on,
        color: color.to_owned(),
        lens_type: lens.to_owned(),
        quantity: 1,
    }
}

/// Test helper: the fields the checkout form collects.
fn checkout_details() -> CheckoutDetails {
    CheckoutDetails {
        customer_name: "Ada Lovelace".to_owned(),
        shipping_address: Some("1 Harbor Lane, Port City".to_owned()),
    }
}

// ============================================================================
// Pricing Tests
// ============================================================================

#[test]
fn test_lens_add_on_is_priced_into_the_line() {
    let shop = TestShop::open();
    let cart = shop.state.cart();

    // Aurora Aviator lists at 129.99; Polarized adds 50.00
    let polarized = seed_frame_line(&shop, "PRDaur01", "Gold", "Polarized");
    let standard = seed_frame_line(&shop, "PRDaur01", "Gold", "Standard");
    cart.add(polarized).expect("add polarized line");
    cart.add(standard).expect("add standard line");

    let items = cart.items();
    assert_eq!(items.len(), 2, "lens type separates lines");
    assert_eq!(items[0].price, Price::from_cents(17_999));
    assert_eq!(items[1].price, Price::from_cents(12_999));
}

#[test]
fn test_totals_use_the_configured_flat_fee() {
    let shop = TestShop::open();
    let fee = shop.state.config().shipping_fee;

    let created = shop
        .state
        .products()
        .create(NewProduct {
            name: "Test Frame".to_owned(),
            price: Price::from_cents(10_000),
            category: ProductCategory::Sunglasses,
            image: "/images/products/test.webp".to_owned(),
            colors: vec!["Black".to_owned()],
            description: None,
            tags: None,
            ribbon: None,
            brand_id: None,
        })
        .expect("create product");

    let line = CartItem {
        product_id: created.value.id,
        name: created.value.name,
        image: created.value.image,
        price: created.value.price,
        color: "Black".to_owned(),
        lens_type: "Standard".to_owned(),
        quantity: 1,
    };
    shop.state.cart().add(line.clone()).expect("first add");
    shop.state.cart().add(line).expect("second add");

    // two units at 100.00 plus the default 50.00 fee
    let totals = shop.state.cart().totals(fee);
    assert_eq!(totals.subtotal, Price::from_cents(20_000));
    assert_eq!(totals.shipping, Price::from_cents(5_000));
    assert_eq!(totals.total, Price::from_cents(25_000));
}

// ============================================================================
// Checkout Tests
// ============================================================================

#[test]
fn test_full_purchase_journey() {
    let shop = TestShop::open();
    let fee = shop.state.config().shipping_fee;

    // two polarized Auroras and one standard Solstice
    let aurora = seed_frame_line(&shop, "PRDaur01", "Gold", "Polarized");
    shop.state.cart().add(aurora.clone()).expect("add aurora");
    shop.state.cart().add(aurora).expect("add aurora again");
    let solstice = seed_frame_line(&shop, "PRDsol02", "Tortoise", "Standard");
    shop.state.cart().add(solstice).expect("add solstice");

    // 179.99 * 2 + 99.99 = 459.97, plus the 50.00 fee
    let totals = shop.state.cart().totals(fee);
    assert_eq!(totals.subtotal, Price::from_cents(45_997));
    assert_eq!(totals.total, Price::from_cents(50_997));

    let placed = shop
        .state
        .checkout()
        .place_order(checkout_details(), fee)
        .expect("place order");

    assert_eq!(placed.order.items, 3);
    assert_eq!(placed.order.total, Price::from_cents(50_997));
    assert_eq!(placed.order.status, OrderStatus::Pending);
    assert_eq!(placed.order.customer_name, "Ada Lovelace");
    assert_eq!(
        placed.order.shipping_address.as_deref(),
        Some("1 Harbor Lane, Port City")
    );
    assert!(placed.order_persisted);
    assert!(placed.cart_persisted);

    // the cart emptied, the order landed on the book, the confirmation went out
    assert!(shop.state.cart().is_empty());
    assert_eq!(shop.state.orders().len(), 1);
    assert!(shop.state.orders().find(&placed.order.id).is_some());
    assert_eq!(shop.notifier.kinds(), vec!["order-confirmation"]);
}

#[test]
fn test_checkout_with_an_empty_cart_fails() {
    let shop = TestShop::open();
    let fee = shop.state.config().shipping_fee;

    let err = shop
        .state
        .checkout()
        .place_order(checkout_details(), fee)
        .expect_err("empty cart must not check out");

    assert_eq!(err, CheckoutError::EmptyCart);
    assert!(shop.state.orders().is_empty());
    assert_eq!(shop.notifier.count(), 0);
}

#[test]
fn test_order_snapshot_is_immune_to_later_catalog_edits() {
    let shop = TestShop::open();
    let fee = shop.state.config().shipping_fee;

    let line = seed_frame_line(&shop, "PRDaur01", "Gold", "Standard");
    let product_id = line.product_id.clone();
    shop.state.cart().add(line).expect("add line");

    let placed = shop
        .state
        .checkout()
        .place_order(checkout_details(), fee)
        .expect("place order");

    // reprice the frame in the catalog after the fact
    shop.state
        .products()
        .update(&product_id, |p| p.price = Price::from_cents(99_999))
        .expect("reprice product");

    let on_book = shop
        .state
        .orders()
        .find(&placed.order.id)
        .expect("order is on the book");
    let snapshot = on_book.details.expect("order carries its cart snapshot");
    assert_eq!(snapshot[0].price, Price::from_cents(12_999));
}
