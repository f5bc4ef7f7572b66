use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{decimal, Identified};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub product_count: Option<u64>,
}

impl Identified for ProductCategory {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<u64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, with = "decimal")]
    pub cost_price: f64,
    #[serde(default, with = "decimal")]
    pub selling_price: f64,
    #[serde(default, with = "decimal")]
    pub current_stock: f64,
    #[serde(default, with = "decimal")]
    pub minimum_stock_level: f64,
    #[serde(default)]
    pub unit_of_measurement: Option<String>,
    #[serde(default)]
    pub is_low_stock: bool,
    #[serde(default)]
    pub is_out_of_stock: bool,
    #[serde(default)]
    pub stock_status: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Identified for Product {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: u64,
    pub product: u64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub movement_type: String,
    #[serde(default, with = "decimal")]
    pub quantity: f64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for StockMovement {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload de alta/edición de producto
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub category: u64,
    #[serde(with = "decimal")]
    pub cost_price: f64,
    #[serde(with = "decimal")]
    pub selling_price: f64,
    #[serde(with = "decimal")]
    pub current_stock: f64,
    #[serde(with = "decimal")]
    pub minimum_stock_level: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<String>,
}

/// Ajuste manual de stock (acción adjust_stock / restock)
#[derive(Debug, Clone, Serialize)]
pub struct StockAdjustment {
    #[serde(with = "decimal")]
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
