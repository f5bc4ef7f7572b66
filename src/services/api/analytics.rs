use std::rc::Rc;

use serde_json::Value;

use crate::models::{AlertRule, BusinessInsight, BusinessMetric, CashFlowEntry, ListResponse};
use crate::services::error::ApiError;
use crate::services::http::ApiClient;

pub struct AnalyticsApi {
    client: Rc<ApiClient>,
}

impl AnalyticsApi {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    // Métricas de negocio
    pub async fn get_metrics(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<BusinessMetric>, ApiError> {
        self.client.get_query("/analytics/metrics/", params).await
    }

    pub async fn get_metric(&self, id: u64) -> Result<BusinessMetric, ApiError> {
        self.client.get(&format!("/analytics/metrics/{}/", id)).await
    }

    pub async fn create_metric(&self, data: &Value) -> Result<BusinessMetric, ApiError> {
        self.client.post("/analytics/metrics/", data).await
    }

    pub async fn update_metric(&self, id: u64, data: &Value) -> Result<BusinessMetric, ApiError> {
        self.client.put(&format!("/analytics/metrics/{}/", id), data).await
    }

    pub async fn delete_metric(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/analytics/metrics/{}/", id)).await
    }

    pub async fn get_dashboard(&self) -> Result<Value, ApiError> {
        self.client.get("/analytics/metrics/dashboard/").await
    }

    pub async fn generate_metrics(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/analytics/metrics/generate_metrics/", data).await
    }

    pub async fn get_performance_trends(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get_query("/analytics/metrics/performance_trends/", params).await
    }

    // Flujo de caja
    pub async fn get_cash_flow_data(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<CashFlowEntry>, ApiError> {
        self.client.get_query("/analytics/cash-flow/", params).await
    }

    pub async fn get_cash_flow_datum(&self, id: u64) -> Result<CashFlowEntry, ApiError> {
        self.client.get(&format!("/analytics/cash-flow/{}/", id)).await
    }

    pub async fn create_cash_flow_datum(&self, data: &Value) -> Result<CashFlowEntry, ApiError> {
        self.client.post("/analytics/cash-flow/", data).await
    }

    pub async fn update_cash_flow_datum(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<CashFlowEntry, ApiError> {
        self.client.put(&format!("/analytics/cash-flow/{}/", id), data).await
    }

    pub async fn delete_cash_flow_datum(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/analytics/cash-flow/{}/", id)).await
    }

    pub async fn get_cash_flow_summary(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get_query("/analytics/cash-flow/summary/", params).await
    }

    pub async fn generate_from_transactions(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/analytics/cash-flow/generate_from_transactions/", data).await
    }

    // Insights
    pub async fn get_insights(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<BusinessInsight>, ApiError> {
        self.client.get_query("/analytics/insights/", params).await
    }

    pub async fn get_insight(&self, id: u64) -> Result<BusinessInsight, ApiError> {
        self.client.get(&format!("/analytics/insights/{}/", id)).await
    }

    pub async fn create_insight(&self, data: &Value) -> Result<BusinessInsight, ApiError> {
        self.client.post("/analytics/insights/", data).await
    }

    pub async fn update_insight(&self, id: u64, data: &Value) -> Result<BusinessInsight, ApiError> {
        self.client.put(&format!("/analytics/insights/{}/", id), data).await
    }

    pub async fn delete_insight(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/analytics/insights/{}/", id)).await
    }

    pub async fn get_unread_insights(&self) -> Result<ListResponse<BusinessInsight>, ApiError> {
        self.client.get("/analytics/insights/unread/").await
    }

    pub async fn get_high_priority_insights(
        &self,
    ) -> Result<ListResponse<BusinessInsight>, ApiError> {
        self.client.get("/analytics/insights/high_priority/").await
    }

    pub async fn mark_insight_viewed(&self, id: u64) -> Result<BusinessInsight, ApiError> {
        self.client.post_empty(&format!("/analytics/insights/{}/mark_viewed/", id)).await
    }

    pub async fn mark_insight_implemented(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<BusinessInsight, ApiError> {
        self.client
            .post(&format!("/analytics/insights/{}/mark_implemented/", id), data)
            .await
    }

    pub async fn rate_insight(&self, id: u64, data: &Value) -> Result<BusinessInsight, ApiError> {
        self.client.post(&format!("/analytics/insights/{}/rate/", id), data).await
    }

    // Reglas de alerta
    pub async fn get_alert_rules(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<AlertRule>, ApiError> {
        self.client.get_query("/analytics/alerts/", params).await
    }

    pub async fn get_alert_rule(&self, id: u64) -> Result<AlertRule, ApiError> {
        self.client.get(&format!("/analytics/alerts/{}/", id)).await
    }

    pub async fn create_alert_rule(&self, data: &Value) -> Result<AlertRule, ApiError> {
        self.client.post("/analytics/alerts/", data).await
    }

    pub async fn update_alert_rule(&self, id: u64, data: &Value) -> Result<AlertRule, ApiError> {
        self.client.put(&format!("/analytics/alerts/{}/", id), data).await
    }

    pub async fn delete_alert_rule(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/analytics/alerts/{}/", id)).await
    }

    pub async fn get_active_alert_rules(&self) -> Result<ListResponse<AlertRule>, ApiError> {
        self.client.get("/analytics/alerts/active/").await
    }

    pub async fn test_alert_rule(&self, id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client.post(&format!("/analytics/alerts/{}/test/", id), data).await
    }

    pub async fn trigger_alert_rule(&self, id: u64) -> Result<Value, ApiError> {
        self.client.post_empty(&format!("/analytics/alerts/{}/trigger/", id)).await
    }
}
