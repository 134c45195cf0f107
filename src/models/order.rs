use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fulfillment states an order moves through. Stored lowercase in the
/// backend; anything else fails when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Success,
    Dispatch,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Success,
        OrderStatus::Dispatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Success => "success",
            OrderStatus::Dispatch => "dispatch",
        }
    }

    /// Capitalized form for buttons and select options.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Success => "Success",
            OrderStatus::Dispatch => "Dispatch",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "success" => Ok(OrderStatus::Success),
            "dispatch" => Ok(OrderStatus::Dispatch),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

/// Dashboard filter: everything, or only one status. Purely client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Nav buttons, in display order.
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(OrderStatus::Pending),
        StatusFilter::Only(OrderStatus::Success),
        StatusFilter::Only(OrderStatus::Dispatch),
    ];

    pub fn matches(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == Some(*status),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_name: String,
    /// Image reference (or absolute URL); resolved through the CDN for
    /// display. Items without an image are legal.
    #[serde(default)]
    pub image: Option<String>,
}

/// One order document as projected by the dashboard query. Created and
/// populated entirely by the storefront checkout flow; the dashboard only
/// reads it, overwrites `status`, or deletes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub zip_code: String,
    pub total: f64,
    #[serde(default)]
    pub discount: f64,
    /// Raw checkout timestamp, parsed for display only.
    #[serde(rename = "orderData")]
    pub order_date: String,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
}

impl Order {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
