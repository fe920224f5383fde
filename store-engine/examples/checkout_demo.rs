//! Walk a cart session end to end against the demo catalog.
//!
//! ```text
//! STORE_WORK_DIR=/tmp/storefront LOG_LEVEL=debug cargo run --example checkout_demo
//! ```

use shared::money::format_price;
use store_engine::{BusinessRules, CartStore, Catalog, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration and set up logging
    let config = Config::from_env();
    tracing_subscriber::fmt()
        .with_max_level(
            config
                .log_level
                .parse()
                .unwrap_or(tracing::Level::INFO),
        )
        .with_target(false)
        .init();

    tracing::info!("storefront demo starting");

    // 2. Open the store (cart database + coupon registry)
    let mut store = CartStore::open(&config, BusinessRules::default())?;
    let catalog = Catalog::demo();

    // 3. Drive a session
    store.clear();

    for product in catalog.products().iter().take(3) {
        store.add_item(product.clone());
    }
    store.update_quantity(1, 3);
    store.apply_coupon("SAVE10");

    let totals = store.totals();
    println!("Items ({}):", store.item_count());
    for line in store.items() {
        println!(
            "  {} × {}  {}",
            line.quantity,
            line.product.name,
            format_price(line.line_total())
        );
    }
    println!("Subtotal: {}", format_price(totals.subtotal));
    for entry in &totals.breakdown {
        println!("  {}: -{}", entry.name, format_price(entry.amount));
    }
    println!("Discount: {}", format_price(totals.discount));
    println!("Total:    {}", format_price(totals.total));
    println!("Tax:      {}", format_price(store.tax()));

    Ok(())
}
