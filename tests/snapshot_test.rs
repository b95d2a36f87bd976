use std::sync::Arc;

use order_lines::model::{LineItem, Product};
use order_lines::order::Order;

#[test]
fn test_order_snapshot_serialization() {
    let product = Arc::new(Product::new(1));
    let mut order = Order::new();
    order.add_item(LineItem::new(product.clone(), 10.0, 2)).unwrap();
    order.add_item(LineItem::new(product.clone(), 10.0, 3)).unwrap();

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "items": [
                { "product": { "id": 1 }, "price": 10.0, "quantity": 5 }
            ]
        })
    );

    let restored: Order = serde_json::from_value(json).unwrap();
    assert_eq!(restored, order);
}

#[test]
fn test_snapshot_duplicate_lines_are_merged() {
    let json = serde_json::json!({
        "items": [
            { "product": { "id": 1 }, "price": 10.0, "quantity": 2 },
            { "product": { "id": 2 }, "price": 4.0, "quantity": 1 },
            { "product": { "id": 1 }, "price": 10.0, "quantity": 3 }
        ]
    });

    let order: Order = serde_json::from_value(json).unwrap();

    assert_eq!(order.len(), 2);
    assert_eq!(order.items()[0].product.id().0, 1);
    assert_eq!(order.items()[0].quantity, 5);
    assert_eq!(order.items()[1].product.id().0, 2);
}

#[test]
fn test_snapshot_with_invalid_line_is_rejected() {
    let json = serde_json::json!({
        "items": [
            { "product": { "id": 1 }, "price": 10.0, "quantity": 2 },
            { "product": { "id": 2 }, "price": -5.0, "quantity": 0 }
        ]
    });

    let err = serde_json::from_value::<Order>(json).unwrap_err();
    assert!(
        err.to_string().contains("Incorrect item: negative price"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_snapshot_with_zero_quantity_is_rejected() {
    let json = serde_json::json!({
        "items": [
            { "product": { "id": 3 }, "price": 1.0, "quantity": 0 }
        ]
    });

    let err = serde_json::from_value::<Order>(json).unwrap_err();
    assert!(err.to_string().contains("non-positive quantity"));
}
