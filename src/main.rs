use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pizzeria::domain::order::{Email, OrderChannel, PhoneNumber};
use pizzeria::domain::pizzeria::Pizzeria;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pizzeria=debug")),
        )
        .init();

    tracing::info!("🍕 Starting pizzeria order-tracking demo");

    // === 1. Build the pizzeria and its catalog ===
    let mut pizzeria = Pizzeria::new("La Nonna");

    let margherita = pizzeria.add_item("Margherita", 1200);
    let fugazzeta = pizzeria.add_item("Fugazzeta", 1500);
    let napolitana = pizzeria.add_item("Napolitana", 1400);

    tracing::info!(items = pizzeria.items().len(), "Catalog registered");

    // === 2. Register customers ===
    let ana = pizzeria.add_customer("Ana");
    let bruno = pizzeria.add_customer("Bruno");

    // === 3. Place orders over both channels ===
    pizzeria.place_order(
        ana,
        OrderChannel::Online {
            email: Email::new("ana@example.com"),
        },
        &[margherita, fugazzeta],
    )?;
    pizzeria.place_order(
        ana,
        OrderChannel::Online {
            email: Email::new("ana@example.com"),
        },
        &[fugazzeta],
    )?;
    pizzeria.place_order(
        ana,
        OrderChannel::Phone {
            phone: PhoneNumber::new("555-0101"),
        },
        &[napolitana, napolitana],
    )?;
    pizzeria.place_order(
        bruno,
        OrderChannel::Phone {
            phone: PhoneNumber::new("555-0199"),
        },
        &[margherita],
    )?;

    tracing::info!(orders = pizzeria.order_ids().len(), "✅ Orders placed");

    // === 4. Best-selling online item per customer ===
    for index in 0..pizzeria.customers().len() {
        let name = pizzeria.get_customer(index)?.name().to_string();
        match pizzeria.best_selling_item(index)? {
            Some(position) => {
                let item = pizzeria.get_item(position)?;
                tracing::info!(
                    customer = %name,
                    item = item.name(),
                    "Best-selling online item"
                );
            }
            None => tracing::info!(customer = %name, "No online orders yet"),
        }
    }

    tracing::info!("🎉 Demo complete!");

    Ok(())
}
