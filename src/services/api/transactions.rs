use std::rc::Rc;

use serde_json::Value;

use crate::models::{
    CategorizeRequest, ListResponse, RefundRequest, Transaction, TransactionCategory,
    TransactionItem, TransactionPayload,
};
use crate::services::error::ApiError;
use crate::services::http::ApiClient;

pub struct TransactionApi {
    client: Rc<ApiClient>,
}

impl TransactionApi {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    // Categorías de transacción
    pub async fn get_categories(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<TransactionCategory>, ApiError> {
        self.client.get_query("/transactions/categories/", params).await
    }

    pub async fn get_category(&self, id: u64) -> Result<TransactionCategory, ApiError> {
        self.client.get(&format!("/transactions/categories/{}/", id)).await
    }

    pub async fn create_category(&self, data: &Value) -> Result<TransactionCategory, ApiError> {
        self.client.post("/transactions/categories/", data).await
    }

    pub async fn update_category(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<TransactionCategory, ApiError> {
        self.client.put(&format!("/transactions/categories/{}/", id), data).await
    }

    pub async fn delete_category(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/transactions/categories/{}/", id)).await
    }

    pub async fn get_active_categories(
        &self,
    ) -> Result<ListResponse<TransactionCategory>, ApiError> {
        self.client.get("/transactions/categories/active/").await
    }

    pub async fn get_category_transactions(
        &self,
        id: u64,
    ) -> Result<ListResponse<Transaction>, ApiError> {
        self.client.get(&format!("/transactions/categories/{}/transactions/", id)).await
    }

    // Transacciones
    pub async fn get_transactions(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Transaction>, ApiError> {
        self.client.get_query("/transactions/transactions/", params).await
    }

    pub async fn get_transaction(&self, id: u64) -> Result<Transaction, ApiError> {
        self.client.get(&format!("/transactions/transactions/{}/", id)).await
    }

    pub async fn create_transaction(&self, data: &TransactionPayload) -> Result<Transaction, ApiError> {
        self.client.post("/transactions/transactions/", data).await
    }

    pub async fn update_transaction(
        &self,
        id: u64,
        data: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        self.client.put(&format!("/transactions/transactions/{}/", id), data).await
    }

    pub async fn delete_transaction(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/transactions/transactions/{}/", id)).await
    }

    pub async fn get_today_transactions(&self) -> Result<ListResponse<Transaction>, ApiError> {
        self.client.get("/transactions/transactions/today/").await
    }

    pub async fn get_sales_transactions(&self) -> Result<ListResponse<Transaction>, ApiError> {
        self.client.get("/transactions/transactions/sales/").await
    }

    pub async fn get_purchase_transactions(&self) -> Result<ListResponse<Transaction>, ApiError> {
        self.client.get("/transactions/transactions/purchases/").await
    }

    pub async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/transactions/transactions/dashboard_stats/").await
    }

    pub async fn get_cash_flow(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get_query("/transactions/transactions/cash_flow/", params).await
    }

    pub async fn categorize_transaction(
        &self,
        id: u64,
        data: &CategorizeRequest,
    ) -> Result<Transaction, ApiError> {
        self.client
            .post(&format!("/transactions/transactions/{}/categorize/", id), data)
            .await
    }

    pub async fn refund_transaction(
        &self,
        id: u64,
        data: &RefundRequest,
    ) -> Result<Transaction, ApiError> {
        self.client.post(&format!("/transactions/transactions/{}/refund/", id), data).await
    }

    pub async fn bulk_categorize_transactions(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/transactions/transactions/bulk_categorize/", data).await
    }

    // Ítems de transacción
    pub async fn get_items(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<TransactionItem>, ApiError> {
        self.client.get_query("/transactions/items/", params).await
    }

    pub async fn get_item(&self, id: u64) -> Result<TransactionItem, ApiError> {
        self.client.get(&format!("/transactions/items/{}/", id)).await
    }

    pub async fn create_item(&self, data: &Value) -> Result<TransactionItem, ApiError> {
        self.client.post("/transactions/items/", data).await
    }

    pub async fn update_item(&self, id: u64, data: &Value) -> Result<TransactionItem, ApiError> {
        self.client.put(&format!("/transactions/items/{}/", id), data).await
    }

    pub async fn delete_item(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/transactions/items/{}/", id)).await
    }

    pub async fn get_top_selling_items(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<TransactionItem>, ApiError> {
        self.client.get_query("/transactions/items/top_selling/", params).await
    }

    pub async fn get_items_by_product(
        &self,
        product_id: u64,
    ) -> Result<ListResponse<TransactionItem>, ApiError> {
        let product_id = product_id.to_string();
        self.client
            .get_query("/transactions/items/by_product/", &[("product_id", product_id.as_str())])
            .await
    }
}
