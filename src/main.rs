//! Demo: assemble an order and log how each item lands.

use std::sync::Arc;

use order_lines::lifecycle::{setup_tracing, TracingInitError};
use order_lines::model::{LineItem, Product};
use order_lines::order::Order;
use tracing::{error, info, info_span};

fn main() -> Result<(), TracingInitError> {
    setup_tracing()?;

    info!("Starting order demo");

    let widget = Arc::new(Product::new(1));
    let gadget = Arc::new(Product::new(2));

    let offers = vec![
        LineItem::new(widget.clone(), 10.0, 2),
        LineItem::new(widget.clone(), 10.0, 3),
        LineItem::new(widget.clone(), 15.0, 1),
        LineItem::new(gadget.clone(), -5.0, 1),
        LineItem::new(gadget.clone(), 20.0, 0),
        LineItem::new(gadget.clone(), 20.0, 4),
    ];

    let mut order = Order::new();
    let _span = info_span!("order_assembly").entered();
    for offer in offers {
        if let Err(e) = order.add_item(offer) {
            error!(error = %e, "Item refused");
        }
    }

    for (index, line) in order.iter().enumerate() {
        info!(
            line = index,
            product_id = %line.product.id(),
            price = line.price,
            quantity = line.quantity,
            "Order line"
        );
    }

    info!(lines = order.len(), "Order demo completed");
    Ok(())
}
