//! End-to-end cart session over on-disk storage
//!
//! Wires the real storage, registry, and store together the way the demo
//! driver does, and checks that a session survives a process restart.

use store_engine::{BusinessRules, CartStorage, CartStore, Catalog, CouponRegistry};

fn open_store(path: &std::path::Path) -> CartStore {
    let storage = CartStorage::open(path).unwrap();
    let rules = BusinessRules::default();
    let registry = CouponRegistry::with_configs(&rules.coupons).unwrap();
    CartStore::new(storage, rules, registry)
}

#[test]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cart.redb");
    let catalog = Catalog::demo();

    {
        let mut store = open_store(&db_path);
        store.add_item(catalog.get(1).unwrap().clone());
        store.add_item(catalog.get(2).unwrap().clone());
        store.add_item(catalog.get(1).unwrap().clone());
        store.update_quantity(2, 3);

        assert_eq!(store.item_count(), 5);
    }

    // "Restart": reopen everything from the same database file
    let store = open_store(&db_path);

    assert_eq!(store.items().len(), 2);
    assert_eq!(store.items()[0].product.id, 1);
    assert_eq!(store.items()[0].quantity, 2);
    assert_eq!(store.items()[1].product.id, 2);
    assert_eq!(store.items()[1].quantity, 3);
    assert_eq!(store.item_count(), 5);
}

#[test]
fn test_full_checkout_walk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cart.redb");
    let catalog = Catalog::demo();

    let mut store = open_store(&db_path);

    // 5 laptop stands at $49.99 = $249.95: bulk and order rules both fire
    store.add_item(catalog.get(3).unwrap().clone());
    store.update_quantity(3, 5);

    let totals = store.totals();
    assert!((totals.subtotal - 249.95).abs() < 0.001);
    assert_eq!(totals.breakdown.len(), 2);
    assert_eq!(totals.breakdown[0].name, "Bulk Discount");
    assert_eq!(totals.breakdown[1].name, "Order Discount");
    assert_eq!(totals.total, totals.subtotal - totals.discount);

    // Stack a percentage coupon on top
    store.apply_coupon("SAVE10");
    let with_coupon = store.totals();
    assert_eq!(with_coupon.breakdown.len(), 3);
    assert!(with_coupon.discount > totals.discount);

    let sum: f64 = with_coupon.breakdown.iter().map(|b| b.amount).sum();
    assert_eq!(with_coupon.discount, sum);

    // Checkout clears the session
    store.clear();
    assert!(store.items().is_empty());
    assert_eq!(store.totals().total, 0.0);
}

#[test]
fn test_clear_persists_the_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cart.redb");
    let catalog = Catalog::demo();

    {
        let mut store = open_store(&db_path);
        store.add_item(catalog.get(5).unwrap().clone());
        store.clear();
    }

    let store = open_store(&db_path);
    assert!(store.items().is_empty());
}
