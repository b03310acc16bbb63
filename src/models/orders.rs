//! Sales document models
//!
//! Order and quote headers plus the recently-purchased item list, as served
//! by the Sage 100 REST proxy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a sales document is a firm order or a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Order,
    Quote,
}

/// Header-level view of a sales order or quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub sales_order_no: String,
    pub kind: OrderKind,
    pub order_date: NaiveDate,
    /// Quotes carry an expiration date, orders usually do not
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    pub status: String,
    #[serde(default)]
    pub customer_po_no: Option<String>,
    pub total: f64,
}

/// An item the customer bought recently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentPurchasedItem {
    pub item_code: String,
    pub description: String,
    pub last_purchase_date: NaiveDate,
    pub quantity_shipped: f64,
    pub unit_price: f64,
}
