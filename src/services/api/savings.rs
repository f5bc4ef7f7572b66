use std::rc::Rc;

use serde_json::Value;

use crate::models::{
    AmountRequest, ListResponse, SavingsAccount, SavingsGoal, SavingsTransaction,
};
use crate::services::error::ApiError;
use crate::services::http::ApiClient;

pub struct SavingsApi {
    client: Rc<ApiClient>,
}

impl SavingsApi {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    // Cuentas de ahorro
    pub async fn get_accounts(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<SavingsAccount>, ApiError> {
        self.client.get_query("/savings/accounts/", params).await
    }

    pub async fn get_account(&self, id: u64) -> Result<SavingsAccount, ApiError> {
        self.client.get(&format!("/savings/accounts/{}/", id)).await
    }

    pub async fn create_account(&self, data: &Value) -> Result<SavingsAccount, ApiError> {
        self.client.post("/savings/accounts/", data).await
    }

    pub async fn update_account(&self, id: u64, data: &Value) -> Result<SavingsAccount, ApiError> {
        self.client.put(&format!("/savings/accounts/{}/", id), data).await
    }

    pub async fn delete_account(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/savings/accounts/{}/", id)).await
    }

    pub async fn get_active_accounts(&self) -> Result<ListResponse<SavingsAccount>, ApiError> {
        self.client.get("/savings/accounts/active/").await
    }

    pub async fn deposit(&self, id: u64, data: &AmountRequest) -> Result<SavingsAccount, ApiError> {
        self.client.post(&format!("/savings/accounts/{}/deposit/", id), data).await
    }

    pub async fn withdraw(&self, id: u64, data: &AmountRequest) -> Result<SavingsAccount, ApiError> {
        self.client.post(&format!("/savings/accounts/{}/withdraw/", id), data).await
    }

    pub async fn get_account_transactions(
        &self,
        id: u64,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<SavingsTransaction>, ApiError> {
        self.client
            .get_query(&format!("/savings/accounts/{}/transactions/", id), params)
            .await
    }

    pub async fn set_default_account(&self, id: u64) -> Result<SavingsAccount, ApiError> {
        self.client.post_empty(&format!("/savings/accounts/{}/set_default/", id)).await
    }

    pub async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/savings/accounts/dashboard_stats/").await
    }

    // Transacciones de ahorro
    pub async fn get_transactions(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<SavingsTransaction>, ApiError> {
        self.client.get_query("/savings/transactions/", params).await
    }

    pub async fn get_transaction(&self, id: u64) -> Result<SavingsTransaction, ApiError> {
        self.client.get(&format!("/savings/transactions/{}/", id)).await
    }

    pub async fn create_transaction(&self, data: &Value) -> Result<SavingsTransaction, ApiError> {
        self.client.post("/savings/transactions/", data).await
    }

    pub async fn update_transaction(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<SavingsTransaction, ApiError> {
        self.client.put(&format!("/savings/transactions/{}/", id), data).await
    }

    pub async fn delete_transaction(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/savings/transactions/{}/", id)).await
    }

    pub async fn get_deposits(&self) -> Result<ListResponse<SavingsTransaction>, ApiError> {
        self.client.get("/savings/transactions/deposits/").await
    }

    pub async fn get_withdrawals(&self) -> Result<ListResponse<SavingsTransaction>, ApiError> {
        self.client.get("/savings/transactions/withdrawals/").await
    }

    pub async fn get_auto_saves(&self) -> Result<ListResponse<SavingsTransaction>, ApiError> {
        self.client.get("/savings/transactions/auto_saves/").await
    }

    pub async fn get_today_transactions(&self) -> Result<ListResponse<SavingsTransaction>, ApiError> {
        self.client.get("/savings/transactions/today/").await
    }

    pub async fn get_transaction_summary(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get_query("/savings/transactions/summary/", params).await
    }

    // Metas de ahorro
    pub async fn get_goals(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<SavingsGoal>, ApiError> {
        self.client.get_query("/savings/goals/", params).await
    }

    pub async fn get_goal(&self, id: u64) -> Result<SavingsGoal, ApiError> {
        self.client.get(&format!("/savings/goals/{}/", id)).await
    }

    pub async fn create_goal(&self, data: &Value) -> Result<SavingsGoal, ApiError> {
        self.client.post("/savings/goals/", data).await
    }

    pub async fn update_goal(&self, id: u64, data: &Value) -> Result<SavingsGoal, ApiError> {
        self.client.put(&format!("/savings/goals/{}/", id), data).await
    }

    pub async fn delete_goal(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/savings/goals/{}/", id)).await
    }

    pub async fn get_active_goals(&self) -> Result<ListResponse<SavingsGoal>, ApiError> {
        self.client.get("/savings/goals/active/").await
    }

    pub async fn get_completed_goals(&self) -> Result<ListResponse<SavingsGoal>, ApiError> {
        self.client.get("/savings/goals/completed/").await
    }

    pub async fn contribute_to_goal(
        &self,
        id: u64,
        data: &AmountRequest,
    ) -> Result<SavingsGoal, ApiError> {
        self.client.post(&format!("/savings/goals/{}/contribute/", id), data).await
    }

    pub async fn pause_goal(&self, id: u64) -> Result<SavingsGoal, ApiError> {
        self.client.post_empty(&format!("/savings/goals/{}/pause/", id)).await
    }

    pub async fn resume_goal(&self, id: u64) -> Result<SavingsGoal, ApiError> {
        self.client.post_empty(&format!("/savings/goals/{}/resume/", id)).await
    }

    pub async fn get_goals_dashboard_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/savings/goals/dashboard_stats/").await
    }
}
