use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{decimal, Identified};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCategory {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category_type: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Identified for TransactionCategory {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    /// "sale" | "purchase" | "refund" | "expense"
    pub transaction_type: String,
    #[serde(default)]
    pub transaction_number: Option<String>,
    #[serde(default)]
    pub category: Option<u64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, with = "decimal")]
    pub subtotal: f64,
    #[serde(default, with = "decimal")]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub transaction_date: DateTime<Utc>,
}

impl Identified for Transaction {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: u64,
    pub transaction: u64,
    #[serde(default)]
    pub product: Option<u64>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, with = "decimal")]
    pub quantity: f64,
    #[serde(default, with = "decimal")]
    pub unit_price: f64,
    #[serde(default, with = "decimal")]
    pub line_total: f64,
}

impl Identified for TransactionItem {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionPayload {
    pub transaction_type: String,
    #[serde(with = "decimal")]
    pub total_amount: f64,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Acción categorize: asigna una categoría a una transacción existente
#[derive(Debug, Clone, Serialize)]
pub struct CategorizeRequest {
    pub category_id: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefundRequest {
    #[serde(with = "decimal")]
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
