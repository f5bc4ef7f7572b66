use std::rc::Rc;

use serde_json::Value;

use crate::models::{
    ListResponse, Loan, LoanApplication, LoanPayment, LoanProduct, LoanRepayment,
};
use crate::services::error::ApiError;
use crate::services::http::ApiClient;

pub struct LoanApi {
    client: Rc<ApiClient>,
}

impl LoanApi {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    // Productos de préstamo
    pub async fn get_loan_products(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<LoanProduct>, ApiError> {
        self.client.get_query("/loans/products/", params).await
    }

    pub async fn get_loan_product(&self, id: u64) -> Result<LoanProduct, ApiError> {
        self.client.get(&format!("/loans/products/{}/", id)).await
    }

    pub async fn create_loan_product(&self, data: &Value) -> Result<LoanProduct, ApiError> {
        self.client.post("/loans/products/", data).await
    }

    pub async fn update_loan_product(&self, id: u64, data: &Value) -> Result<LoanProduct, ApiError> {
        self.client.put(&format!("/loans/products/{}/", id), data).await
    }

    pub async fn delete_loan_product(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/loans/products/{}/", id)).await
    }

    pub async fn get_available_loan_products(&self) -> Result<ListResponse<LoanProduct>, ApiError> {
        self.client.get("/loans/products/available/").await
    }

    /// Simulación de préstamo; el cálculo es del servidor, aquí solo se espeja
    pub async fn calculate_loan(&self, id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client.post(&format!("/loans/products/{}/calculate_loan/", id), data).await
    }

    // Préstamos
    pub async fn get_loans(&self, params: &[(&str, &str)]) -> Result<ListResponse<Loan>, ApiError> {
        self.client.get_query("/loans/loans/", params).await
    }

    pub async fn get_loan(&self, id: u64) -> Result<Loan, ApiError> {
        self.client.get(&format!("/loans/loans/{}/", id)).await
    }

    pub async fn create_loan(&self, data: &LoanApplication) -> Result<Loan, ApiError> {
        self.client.post("/loans/loans/", data).await
    }

    pub async fn update_loan(&self, id: u64, data: &Value) -> Result<Loan, ApiError> {
        self.client.put(&format!("/loans/loans/{}/", id), data).await
    }

    pub async fn delete_loan(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/loans/loans/{}/", id)).await
    }

    pub async fn get_my_loans(&self) -> Result<ListResponse<Loan>, ApiError> {
        self.client.get("/loans/loans/my_loans/").await
    }

    pub async fn get_active_loans(&self) -> Result<ListResponse<Loan>, ApiError> {
        self.client.get("/loans/loans/active/").await
    }

    pub async fn get_overdue_loans(&self) -> Result<ListResponse<Loan>, ApiError> {
        self.client.get("/loans/loans/overdue/").await
    }

    pub async fn approve_loan(&self, id: u64, data: &Value) -> Result<Loan, ApiError> {
        self.client.post(&format!("/loans/loans/{}/approve/", id), data).await
    }

    pub async fn reject_loan(&self, id: u64, data: &Value) -> Result<Loan, ApiError> {
        self.client.post(&format!("/loans/loans/{}/reject/", id), data).await
    }

    pub async fn disburse_loan(&self, id: u64) -> Result<Loan, ApiError> {
        self.client.post_empty(&format!("/loans/loans/{}/disburse/", id)).await
    }

    pub async fn get_loan_repayments(
        &self,
        id: u64,
    ) -> Result<ListResponse<LoanRepayment>, ApiError> {
        self.client.get(&format!("/loans/loans/{}/repayments/", id)).await
    }

    pub async fn make_loan_payment(
        &self,
        id: u64,
        data: &LoanPayment,
    ) -> Result<LoanRepayment, ApiError> {
        self.client.post(&format!("/loans/loans/{}/make_payment/", id), data).await
    }

    pub async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/loans/loans/dashboard_stats/").await
    }

    // Cuotas
    pub async fn get_repayments(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<LoanRepayment>, ApiError> {
        self.client.get_query("/loans/repayments/", params).await
    }

    pub async fn get_repayment(&self, id: u64) -> Result<LoanRepayment, ApiError> {
        self.client.get(&format!("/loans/repayments/{}/", id)).await
    }

    pub async fn create_repayment(&self, data: &Value) -> Result<LoanRepayment, ApiError> {
        self.client.post("/loans/repayments/", data).await
    }

    pub async fn update_repayment(&self, id: u64, data: &Value) -> Result<LoanRepayment, ApiError> {
        self.client.put(&format!("/loans/repayments/{}/", id), data).await
    }

    pub async fn delete_repayment(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/loans/repayments/{}/", id)).await
    }

    pub async fn get_pending_repayments(&self) -> Result<ListResponse<LoanRepayment>, ApiError> {
        self.client.get("/loans/repayments/pending/").await
    }

    pub async fn get_overdue_repayments(&self) -> Result<ListResponse<LoanRepayment>, ApiError> {
        self.client.get("/loans/repayments/overdue/").await
    }

    pub async fn process_repayment(&self, id: u64, data: &Value) -> Result<LoanRepayment, ApiError> {
        self.client.post(&format!("/loans/repayments/{}/process_payment/", id), data).await
    }
}
