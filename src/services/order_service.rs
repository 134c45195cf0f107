use serde_json::{json, Value};

use crate::models::order::{Order, OrderStatus};
use crate::services::content_client::{ContentClient, ContentError};

/// Projection for the dashboard: every order document, with cart item
/// references dereferenced down to product name + image reference.
const ORDERS_QUERY: &str = r#"*[_type == "order"]{
  _id,
  firstName,
  lastName,
  email,
  phone,
  city,
  address,
  total,
  zipCode,
  discount,
  orderData,
  status,
  cartItems[]->{
    productName,
    "image": image.asset._ref
  }
}"#;

/// Fetch all orders in one shot. No pagination - the dashboard renders
/// whatever this returns.
pub async fn fetch_orders() -> Result<Vec<Order>, ContentError> {
    log::info!("📦 Fetching orders...");
    let client = ContentClient::new();
    let orders = client.query::<Vec<Order>>(ORDERS_QUERY).await?;
    Ok(orders)
}

/// Overwrite the one `status` field on the given order and commit.
pub async fn update_order_status(order_id: &str, status: OrderStatus) -> Result<(), ContentError> {
    log::info!("✏️ Updating order {} to {}", order_id, status);
    let client = ContentClient::new();
    client.mutate(status_patch(order_id, status)).await
}

/// Delete the whole order document.
pub async fn delete_order(order_id: &str) -> Result<(), ContentError> {
    log::info!("🗑️ Deleting order {}", order_id);
    let client = ContentClient::new();
    client.mutate(delete_mutation(order_id)).await
}

fn status_patch(order_id: &str, status: OrderStatus) -> Value {
    json!([{
        "patch": {
            "id": order_id,
            "set": { "status": status.as_str() }
        }
    }])
}

fn delete_mutation(order_id: &str) -> Value {
    json!([{
        "delete": { "id": order_id }
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_patch_sets_exactly_one_field() {
        let patch = status_patch("order-1", OrderStatus::Dispatch);
        assert_eq!(
            patch,
            json!([{
                "patch": {
                    "id": "order-1",
                    "set": { "status": "dispatch" }
                }
            }])
        );
    }

    #[test]
    fn delete_targets_by_identifier() {
        assert_eq!(
            delete_mutation("order-1"),
            json!([{ "delete": { "id": "order-1" } }])
        );
    }

    #[test]
    fn query_dereferences_cart_items() {
        assert!(ORDERS_QUERY.starts_with(r#"*[_type == "order"]"#));
        assert!(ORDERS_QUERY.contains("cartItems[]->"));
    }
}
