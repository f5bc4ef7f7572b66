use std::rc::Rc;

use serde_json::Value;

use crate::models::{
    ListResponse, Product, ProductCategory, ProductPayload, StockAdjustment, StockMovement,
};
use crate::services::error::ApiError;
use crate::services::http::ApiClient;

pub struct InventoryApi {
    client: Rc<ApiClient>,
}

impl InventoryApi {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    // Categorías
    pub async fn get_categories(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<ProductCategory>, ApiError> {
        self.client.get_query("/inventory/categories/", params).await
    }

    pub async fn get_category(&self, id: u64) -> Result<ProductCategory, ApiError> {
        self.client.get(&format!("/inventory/categories/{}/", id)).await
    }

    pub async fn create_category(&self, data: &Value) -> Result<ProductCategory, ApiError> {
        self.client.post("/inventory/categories/", data).await
    }

    pub async fn update_category(&self, id: u64, data: &Value) -> Result<ProductCategory, ApiError> {
        self.client.put(&format!("/inventory/categories/{}/", id), data).await
    }

    pub async fn delete_category(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/inventory/categories/{}/", id)).await
    }

    pub async fn get_active_categories(&self) -> Result<ListResponse<ProductCategory>, ApiError> {
        self.client.get("/inventory/categories/active/").await
    }

    pub async fn get_category_products(&self, id: u64) -> Result<ListResponse<Product>, ApiError> {
        self.client.get(&format!("/inventory/categories/{}/products/", id)).await
    }

    pub async fn get_category_stats(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("/inventory/categories/{}/stats/", id)).await
    }

    // Productos
    pub async fn get_products(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Product>, ApiError> {
        self.client.get_query("/inventory/products/", params).await
    }

    pub async fn get_product(&self, id: u64) -> Result<Product, ApiError> {
        self.client.get(&format!("/inventory/products/{}/", id)).await
    }

    pub async fn create_product(&self, data: &ProductPayload) -> Result<Product, ApiError> {
        self.client.post("/inventory/products/", data).await
    }

    pub async fn update_product(&self, id: u64, data: &ProductPayload) -> Result<Product, ApiError> {
        self.client.put(&format!("/inventory/products/{}/", id), data).await
    }

    pub async fn delete_product(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/inventory/products/{}/", id)).await
    }

    pub async fn get_low_stock_products(&self) -> Result<ListResponse<Product>, ApiError> {
        self.client.get("/inventory/products/low_stock/").await
    }

    pub async fn get_out_of_stock_products(&self) -> Result<ListResponse<Product>, ApiError> {
        self.client.get("/inventory/products/out_of_stock/").await
    }

    pub async fn get_top_selling_products(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Product>, ApiError> {
        self.client.get_query("/inventory/products/top_selling/", params).await
    }

    pub async fn get_slow_moving_products(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Product>, ApiError> {
        self.client.get_query("/inventory/products/slow_moving/", params).await
    }

    pub async fn adjust_stock(&self, id: u64, data: &StockAdjustment) -> Result<Product, ApiError> {
        self.client.post(&format!("/inventory/products/{}/adjust_stock/", id), data).await
    }

    pub async fn restock_product(
        &self,
        id: u64,
        data: &StockAdjustment,
    ) -> Result<Product, ApiError> {
        self.client.post(&format!("/inventory/products/{}/restock/", id), data).await
    }

    pub async fn get_stock_history(&self, id: u64) -> Result<ListResponse<StockMovement>, ApiError> {
        self.client.get(&format!("/inventory/products/{}/stock_history/", id)).await
    }

    pub async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/inventory/products/dashboard_stats/").await
    }

    // Movimientos de stock
    pub async fn get_stock_movements(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<StockMovement>, ApiError> {
        self.client.get_query("/inventory/stock-movements/", params).await
    }

    pub async fn get_stock_movement(&self, id: u64) -> Result<StockMovement, ApiError> {
        self.client.get(&format!("/inventory/stock-movements/{}/", id)).await
    }

    pub async fn create_stock_movement(&self, data: &Value) -> Result<StockMovement, ApiError> {
        self.client.post("/inventory/stock-movements/", data).await
    }

    pub async fn update_stock_movement(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<StockMovement, ApiError> {
        self.client.put(&format!("/inventory/stock-movements/{}/", id), data).await
    }

    pub async fn delete_stock_movement(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/inventory/stock-movements/{}/", id)).await
    }

    pub async fn get_today_movements(&self) -> Result<ListResponse<StockMovement>, ApiError> {
        self.client.get("/inventory/stock-movements/today/").await
    }

    pub async fn get_movements_by_type(
        &self,
        movement_type: &str,
    ) -> Result<ListResponse<StockMovement>, ApiError> {
        self.client
            .get_query("/inventory/stock-movements/by_type/", &[("type", movement_type)])
            .await
    }

    pub async fn get_movement_summary(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get_query("/inventory/stock-movements/summary/", params).await
    }
}
