// ============================================================================
// TRANSACTION STORE - Caché local de transacciones y sus categorías
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Utc;
use serde_json::Value;

use crate::models::{
    CategorizeRequest, ListResponse, RefundRequest, Transaction, TransactionCategory,
    TransactionPayload,
};
use crate::services::api::TransactionApi;
use crate::services::error::ApiError;
use crate::services::toast::Toaster;
use crate::stores::cache;

/// Operaciones de red del store de transacciones, sustituibles en tests
pub trait TransactionGateway {
    async fn get_transactions(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Transaction>, ApiError>;
    async fn get_categories(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<TransactionCategory>, ApiError>;
    async fn create_transaction(&self, data: &TransactionPayload) -> Result<Transaction, ApiError>;
    async fn update_transaction(
        &self,
        id: u64,
        data: &TransactionPayload,
    ) -> Result<Transaction, ApiError>;
    async fn categorize_transaction(
        &self,
        id: u64,
        data: &CategorizeRequest,
    ) -> Result<Transaction, ApiError>;
    async fn refund_transaction(
        &self,
        id: u64,
        data: &RefundRequest,
    ) -> Result<Transaction, ApiError>;
    async fn get_dashboard_stats(&self) -> Result<Value, ApiError>;
    async fn get_cash_flow(&self, params: &[(&str, &str)]) -> Result<Value, ApiError>;
}

impl TransactionGateway for TransactionApi {
    async fn get_transactions(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Transaction>, ApiError> {
        TransactionApi::get_transactions(self, params).await
    }

    async fn get_categories(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<TransactionCategory>, ApiError> {
        TransactionApi::get_categories(self, params).await
    }

    async fn create_transaction(&self, data: &TransactionPayload) -> Result<Transaction, ApiError> {
        TransactionApi::create_transaction(self, data).await
    }

    async fn update_transaction(
        &self,
        id: u64,
        data: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        TransactionApi::update_transaction(self, id, data).await
    }

    async fn categorize_transaction(
        &self,
        id: u64,
        data: &CategorizeRequest,
    ) -> Result<Transaction, ApiError> {
        TransactionApi::categorize_transaction(self, id, data).await
    }

    async fn refund_transaction(
        &self,
        id: u64,
        data: &RefundRequest,
    ) -> Result<Transaction, ApiError> {
        TransactionApi::refund_transaction(self, id, data).await
    }

    async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        TransactionApi::get_dashboard_stats(self).await
    }

    async fn get_cash_flow(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        TransactionApi::get_cash_flow(self, params).await
    }
}

pub struct TransactionStore<A = TransactionApi> {
    api: A,
    toaster: Rc<dyn Toaster>,
    transactions: RefCell<Vec<Transaction>>,
    categories: RefCell<Vec<TransactionCategory>>,
    is_loading: Cell<bool>,
}

impl<A: TransactionGateway> TransactionStore<A> {
    pub fn new(api: A, toaster: Rc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            transactions: RefCell::new(Vec::new()),
            categories: RefCell::new(Vec::new()),
            is_loading: Cell::new(false),
        }
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.borrow().clone()
    }

    pub fn categories(&self) -> Vec<TransactionCategory> {
        self.categories.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    // ------------------------------------------------------------------
    // Vistas derivadas
    // ------------------------------------------------------------------

    pub fn today_transactions(&self) -> Vec<Transaction> {
        let today = Utc::now().date_naive();
        self.transactions
            .borrow()
            .iter()
            .filter(|t| t.transaction_date.date_naive() == today)
            .cloned()
            .collect()
    }

    pub fn sales_transactions(&self) -> Vec<Transaction> {
        self.transactions
            .borrow()
            .iter()
            .filter(|t| t.transaction_type == "sale")
            .cloned()
            .collect()
    }

    pub fn purchase_transactions(&self) -> Vec<Transaction> {
        self.transactions
            .borrow()
            .iter()
            .filter(|t| t.transaction_type == "purchase")
            .cloned()
            .collect()
    }

    pub fn total_sales_today(&self) -> f64 {
        self.today_transactions()
            .iter()
            .filter(|t| t.transaction_type == "sale")
            .map(|t| t.total_amount)
            .sum()
    }

    // ------------------------------------------------------------------
    // Operaciones
    // ------------------------------------------------------------------

    pub async fn fetch_transactions(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Vec<Transaction>, ApiError> {
        self.is_loading.set(true);
        let result = self.api.get_transactions(params).await;
        self.is_loading.set(false);

        match result {
            Ok(response) => {
                let items = response.into_items();
                log::info!("💰 Transacciones cargadas: {}", items.len());
                cache::replace_all(&mut self.transactions.borrow_mut(), items.clone());
                Ok(items)
            }
            Err(err) => {
                self.toaster.error("Failed to fetch transactions");
                Err(err)
            }
        }
    }

    pub async fn fetch_categories(&self) -> Result<Vec<TransactionCategory>, ApiError> {
        match self.api.get_categories(&[]).await {
            Ok(response) => {
                let items = response.into_items();
                cache::replace_all(&mut self.categories.borrow_mut(), items.clone());
                Ok(items)
            }
            Err(err) => {
                self.toaster.error("Failed to fetch transaction categories");
                Err(err)
            }
        }
    }

    pub async fn create_transaction(
        &self,
        data: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        match self.api.create_transaction(data).await {
            Ok(transaction) => {
                cache::prepend(&mut self.transactions.borrow_mut(), transaction.clone());
                self.toaster.success("Transaction created successfully!");
                Ok(transaction)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to create transaction"));
                Err(err)
            }
        }
    }

    pub async fn update_transaction(
        &self,
        id: u64,
        data: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        match self.api.update_transaction(id, data).await {
            Ok(transaction) => {
                cache::replace_by_id(&mut self.transactions.borrow_mut(), transaction.clone());
                self.toaster.success("Transaction updated successfully!");
                Ok(transaction)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to update transaction"));
                Err(err)
            }
        }
    }

    pub async fn categorize_transaction(
        &self,
        id: u64,
        category_id: u64,
    ) -> Result<Transaction, ApiError> {
        let request = CategorizeRequest { category_id };
        match self.api.categorize_transaction(id, &request).await {
            Ok(transaction) => {
                cache::replace_by_id(&mut self.transactions.borrow_mut(), transaction.clone());
                self.toaster.success("Transaction categorized successfully!");
                Ok(transaction)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to categorize transaction"));
                Err(err)
            }
        }
    }

    /// El reembolso genera una transacción nueva: se antepone, no se
    /// reemplaza la original
    pub async fn refund_transaction(
        &self,
        id: u64,
        data: &RefundRequest,
    ) -> Result<Transaction, ApiError> {
        match self.api.refund_transaction(id, data).await {
            Ok(refund) => {
                cache::prepend(&mut self.transactions.borrow_mut(), refund.clone());
                self.toaster.success("Refund processed successfully!");
                Ok(refund)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to process refund"));
                Err(err)
            }
        }
    }

    pub async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        match self.api.get_dashboard_stats().await {
            Ok(stats) => Ok(stats),
            Err(err) => {
                self.toaster.error("Failed to fetch dashboard stats");
                Err(err)
            }
        }
    }

    pub async fn get_cash_flow(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        match self.api.get_cash_flow(params).await {
            Ok(cash_flow) => Ok(cash_flow),
            Err(err) => {
                self.toaster.error("Failed to fetch cash flow data");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::toast::{RecordingToaster, ToastLevel};
    use chrono::Duration;
    use futures::executor::block_on;
    use serde_json::json;

    #[derive(Default)]
    struct FakeTransactionApi {
        transactions: RefCell<Option<Result<ListResponse<Transaction>, ApiError>>>,
        transaction_result: RefCell<Option<Result<Transaction, ApiError>>>,
    }

    fn unscripted<T>() -> Result<T, ApiError> {
        Err(ApiError::Unexpected("no response scripted".to_string()))
    }

    impl TransactionGateway for FakeTransactionApi {
        async fn get_transactions(
            &self,
            _params: &[(&str, &str)],
        ) -> Result<ListResponse<Transaction>, ApiError> {
            self.transactions.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn get_categories(
            &self,
            _params: &[(&str, &str)],
        ) -> Result<ListResponse<TransactionCategory>, ApiError> {
            unscripted()
        }

        async fn create_transaction(
            &self,
            _data: &TransactionPayload,
        ) -> Result<Transaction, ApiError> {
            self.transaction_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn update_transaction(
            &self,
            _id: u64,
            _data: &TransactionPayload,
        ) -> Result<Transaction, ApiError> {
            self.transaction_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn categorize_transaction(
            &self,
            _id: u64,
            _data: &CategorizeRequest,
        ) -> Result<Transaction, ApiError> {
            self.transaction_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn refund_transaction(
            &self,
            _id: u64,
            _data: &RefundRequest,
        ) -> Result<Transaction, ApiError> {
            self.transaction_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
            unscripted()
        }

        async fn get_cash_flow(&self, _params: &[(&str, &str)]) -> Result<Value, ApiError> {
            unscripted()
        }
    }

    fn test_store() -> (TransactionStore<FakeTransactionApi>, Rc<RecordingToaster>) {
        let toaster = Rc::new(RecordingToaster::new());
        let store = TransactionStore::new(FakeTransactionApi::default(), toaster.clone());
        (store, toaster)
    }

    fn transaction(
        id: u64,
        transaction_type: &str,
        amount: f64,
        date: chrono::DateTime<Utc>,
    ) -> Transaction {
        serde_json::from_value(json!({
            "id": id,
            "transaction_type": transaction_type,
            "total_amount": amount,
            "transaction_date": date.to_rfc3339(),
        }))
        .unwrap()
    }

    #[test]
    fn today_view_filters_by_date() {
        let (store, _) = test_store();
        let now = Utc::now();
        let yesterday = now - Duration::days(1);
        cache::replace_all(
            &mut store.transactions.borrow_mut(),
            vec![
                transaction(1, "sale", 100.0, now),
                transaction(2, "sale", 50.0, yesterday),
            ],
        );

        let today = store.today_transactions();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].id, 1);
    }

    #[test]
    fn sales_and_purchases_split_by_type() {
        let (store, _) = test_store();
        let now = Utc::now();
        cache::replace_all(
            &mut store.transactions.borrow_mut(),
            vec![
                transaction(1, "sale", 100.0, now),
                transaction(2, "purchase", 70.0, now),
                transaction(3, "sale", 30.0, now),
            ],
        );

        assert_eq!(store.sales_transactions().len(), 2);
        assert_eq!(store.purchase_transactions().len(), 1);
    }

    #[test]
    fn total_sales_today_ignores_purchases_and_old_sales() {
        let (store, _) = test_store();
        let now = Utc::now();
        let yesterday = now - Duration::days(1);
        cache::replace_all(
            &mut store.transactions.borrow_mut(),
            vec![
                transaction(1, "sale", 100.0, now),
                transaction(2, "sale", 40.0, yesterday),
                transaction(3, "purchase", 70.0, now),
            ],
        );

        assert_eq!(store.total_sales_today(), 100.0);
    }

    #[test]
    fn decimal_string_amounts_are_accepted() {
        let t: Transaction = serde_json::from_value(json!({
            "id": 9,
            "transaction_type": "sale",
            "total_amount": "2500.00",
            "transaction_date": Utc::now().to_rfc3339(),
        }))
        .unwrap();
        assert_eq!(t.total_amount, 2500.0);
    }

    #[test]
    fn failed_fetch_clears_loading_and_toasts() {
        let (store, toaster) = test_store();
        *store.api.transactions.borrow_mut() = Some(Err(ApiError::Timeout));

        let result = block_on(store.fetch_transactions(&[]));

        assert!(result.is_err());
        assert!(!store.is_loading());
        assert!(store.transactions().is_empty());
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Error, "Failed to fetch transactions".to_string())]
        );
    }

    #[test]
    fn fetch_transactions_replaces_cache() {
        let (store, _) = test_store();
        let now = Utc::now();
        cache::replace_all(
            &mut store.transactions.borrow_mut(),
            vec![transaction(1, "sale", 10.0, now)],
        );
        *store.api.transactions.borrow_mut() = Some(Ok(ListResponse::Plain(vec![
            transaction(2, "sale", 20.0, now),
        ])));

        let items = block_on(store.fetch_transactions(&[])).unwrap();

        assert_eq!(items.len(), 1);
        assert!(!store.is_loading());
        assert_eq!(store.transactions()[0].id, 2);
    }

    #[test]
    fn create_transaction_prepends_and_toasts() {
        let (store, toaster) = test_store();
        let now = Utc::now();
        cache::replace_all(
            &mut store.transactions.borrow_mut(),
            vec![transaction(1, "sale", 10.0, now)],
        );
        *store.api.transaction_result.borrow_mut() =
            Some(Ok(transaction(2, "sale", 99.0, now)));

        let payload = TransactionPayload {
            transaction_type: "sale".to_string(),
            total_amount: 99.0,
            payment_method: "cash".to_string(),
            category: None,
            customer_name: None,
            notes: None,
        };
        let created = block_on(store.create_transaction(&payload)).unwrap();

        assert_eq!(created.id, 2);
        assert_eq!(store.transactions()[0].id, 2);
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Success, "Transaction created successfully!".to_string())]
        );
    }

    #[test]
    fn refund_prepends_without_replacing_original() {
        let (store, _) = test_store();
        let now = Utc::now();
        cache::replace_all(
            &mut store.transactions.borrow_mut(),
            vec![transaction(1, "sale", 50.0, now)],
        );
        *store.api.transaction_result.borrow_mut() =
            Some(Ok(transaction(7, "refund", 50.0, now)));

        let request = RefundRequest { amount: 50.0, reason: None };
        block_on(store.refund_transaction(1, &request)).unwrap();

        let cached = store.transactions();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].id, 7);
        assert_eq!(cached[1].id, 1);
    }
}
