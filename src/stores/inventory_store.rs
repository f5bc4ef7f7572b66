// ============================================================================
// INVENTORY STORE - Caché local de productos, categorías y movimientos
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::Value;

use crate::models::{
    ListResponse, Product, ProductCategory, ProductPayload, StockAdjustment, StockMovement,
};
use crate::services::api::InventoryApi;
use crate::services::error::ApiError;
use crate::services::toast::Toaster;
use crate::stores::cache;

/// Subconjunto del mapa de inventario que el store consume. Trait
/// inyectable, igual que Toaster: las páginas usan InventoryApi directo
/// para el resto de operaciones.
pub trait InventoryGateway {
    async fn get_products(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Product>, ApiError>;
    async fn get_categories(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<ProductCategory>, ApiError>;
    async fn create_product(&self, data: &ProductPayload) -> Result<Product, ApiError>;
    async fn update_product(&self, id: u64, data: &ProductPayload) -> Result<Product, ApiError>;
    async fn delete_product(&self, id: u64) -> Result<(), ApiError>;
    async fn adjust_stock(&self, id: u64, data: &StockAdjustment) -> Result<Product, ApiError>;
    async fn restock_product(&self, id: u64, data: &StockAdjustment) -> Result<Product, ApiError>;
    async fn get_stock_movements(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<StockMovement>, ApiError>;
    async fn get_dashboard_stats(&self) -> Result<Value, ApiError>;
}

impl InventoryGateway for InventoryApi {
    async fn get_products(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Product>, ApiError> {
        InventoryApi::get_products(self, params).await
    }

    async fn get_categories(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<ProductCategory>, ApiError> {
        InventoryApi::get_categories(self, params).await
    }

    async fn create_product(&self, data: &ProductPayload) -> Result<Product, ApiError> {
        InventoryApi::create_product(self, data).await
    }

    async fn update_product(&self, id: u64, data: &ProductPayload) -> Result<Product, ApiError> {
        InventoryApi::update_product(self, id, data).await
    }

    async fn delete_product(&self, id: u64) -> Result<(), ApiError> {
        InventoryApi::delete_product(self, id).await
    }

    async fn adjust_stock(&self, id: u64, data: &StockAdjustment) -> Result<Product, ApiError> {
        InventoryApi::adjust_stock(self, id, data).await
    }

    async fn restock_product(&self, id: u64, data: &StockAdjustment) -> Result<Product, ApiError> {
        InventoryApi::restock_product(self, id, data).await
    }

    async fn get_stock_movements(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<StockMovement>, ApiError> {
        InventoryApi::get_stock_movements(self, params).await
    }

    async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        InventoryApi::get_dashboard_stats(self).await
    }
}

pub struct InventoryStore<A = InventoryApi> {
    api: A,
    toaster: Rc<dyn Toaster>,
    products: RefCell<Vec<Product>>,
    categories: RefCell<Vec<ProductCategory>>,
    stock_movements: RefCell<Vec<StockMovement>>,
    is_loading: Cell<bool>,
}

impl<A: InventoryGateway> InventoryStore<A> {
    pub fn new(api: A, toaster: Rc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            products: RefCell::new(Vec::new()),
            categories: RefCell::new(Vec::new()),
            stock_movements: RefCell::new(Vec::new()),
            is_loading: Cell::new(false),
        }
    }

    // ------------------------------------------------------------------
    // Lecturas (solo lectura para los consumidores)
    // ------------------------------------------------------------------

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    pub fn categories(&self) -> Vec<ProductCategory> {
        self.categories.borrow().clone()
    }

    pub fn stock_movements(&self) -> Vec<StockMovement> {
        self.stock_movements.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    // ------------------------------------------------------------------
    // Vistas derivadas: proyecciones puras sobre la caché, sin fetch
    // ------------------------------------------------------------------

    pub fn low_stock_products(&self) -> Vec<Product> {
        self.products
            .borrow()
            .iter()
            .filter(|p| p.is_low_stock)
            .cloned()
            .collect()
    }

    pub fn out_of_stock_products(&self) -> Vec<Product> {
        self.products
            .borrow()
            .iter()
            .filter(|p| p.is_out_of_stock)
            .cloned()
            .collect()
    }

    /// Valor total del inventario (Σ stock × costo). Espejo del dato del
    /// servidor; no hay lógica de valuación propia.
    pub fn total_inventory_value(&self) -> f64 {
        self.products
            .borrow()
            .iter()
            .map(|p| p.current_stock * p.cost_price)
            .sum()
    }

    // ------------------------------------------------------------------
    // Operaciones
    // ------------------------------------------------------------------

    pub async fn fetch_products(&self, params: &[(&str, &str)]) -> Result<Vec<Product>, ApiError> {
        self.is_loading.set(true);
        let result = self.api.get_products(params).await;
        // El flag se limpia antes de evaluar el resultado: nunca queda
        // colgado en true, resuelva como resuelva la llamada
        self.is_loading.set(false);

        match result {
            Ok(response) => {
                let items = response.into_items();
                log::info!("📦 Productos cargados: {}", items.len());
                cache::replace_all(&mut self.products.borrow_mut(), items.clone());
                Ok(items)
            }
            Err(err) => {
                self.toaster.error("Failed to fetch products");
                Err(err)
            }
        }
    }

    pub async fn fetch_categories(&self) -> Result<Vec<ProductCategory>, ApiError> {
        match self.api.get_categories(&[]).await {
            Ok(response) => {
                let items = response.into_items();
                cache::replace_all(&mut self.categories.borrow_mut(), items.clone());
                Ok(items)
            }
            Err(err) => {
                self.toaster.error("Failed to fetch categories");
                Err(err)
            }
        }
    }

    pub async fn create_product(&self, data: &ProductPayload) -> Result<Product, ApiError> {
        match self.api.create_product(data).await {
            Ok(product) => {
                cache::prepend(&mut self.products.borrow_mut(), product.clone());
                self.toaster.success("Product created successfully!");
                Ok(product)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to create product"));
                Err(err)
            }
        }
    }

    pub async fn update_product(&self, id: u64, data: &ProductPayload) -> Result<Product, ApiError> {
        match self.api.update_product(id, data).await {
            Ok(product) => {
                cache::replace_by_id(&mut self.products.borrow_mut(), product.clone());
                self.toaster.success("Product updated successfully!");
                Ok(product)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to update product"));
                Err(err)
            }
        }
    }

    pub async fn delete_product(&self, id: u64) -> Result<(), ApiError> {
        match self.api.delete_product(id).await {
            Ok(()) => {
                cache::remove_by_id(&mut self.products.borrow_mut(), id);
                self.toaster.success("Product deleted successfully!");
                Ok(())
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to delete product"));
                Err(err)
            }
        }
    }

    pub async fn adjust_stock(&self, id: u64, data: &StockAdjustment) -> Result<Product, ApiError> {
        match self.api.adjust_stock(id, data).await {
            Ok(product) => {
                cache::replace_by_id(&mut self.products.borrow_mut(), product.clone());
                self.toaster.success("Stock adjusted successfully!");
                Ok(product)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to adjust stock"));
                Err(err)
            }
        }
    }

    pub async fn restock_product(
        &self,
        id: u64,
        data: &StockAdjustment,
    ) -> Result<Product, ApiError> {
        match self.api.restock_product(id, data).await {
            Ok(product) => {
                cache::replace_by_id(&mut self.products.borrow_mut(), product.clone());
                self.toaster.success("Product restocked successfully!");
                Ok(product)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to restock product"));
                Err(err)
            }
        }
    }

    pub async fn fetch_stock_movements(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Vec<StockMovement>, ApiError> {
        match self.api.get_stock_movements(params).await {
            Ok(response) => {
                let items = response.into_items();
                cache::replace_all(&mut self.stock_movements.borrow_mut(), items.clone());
                Ok(items)
            }
            Err(err) => {
                self.toaster.error("Failed to fetch stock movements");
                Err(err)
            }
        }
    }

    /// Stats del dashboard: passthrough sin cachear
    pub async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        match self.api.get_dashboard_stats().await {
            Ok(stats) => Ok(stats),
            Err(err) => {
                self.toaster.error("Failed to fetch dashboard stats");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::toast::{RecordingToaster, ToastLevel};
    use futures::executor::block_on;
    use serde_json::json;

    #[derive(Default)]
    struct FakeInventoryApi {
        products: RefCell<Option<Result<ListResponse<Product>, ApiError>>>,
        product_result: RefCell<Option<Result<Product, ApiError>>>,
        delete_result: RefCell<Option<Result<(), ApiError>>>,
    }

    fn unscripted<T>() -> Result<T, ApiError> {
        Err(ApiError::Unexpected("no response scripted".to_string()))
    }

    impl InventoryGateway for FakeInventoryApi {
        async fn get_products(
            &self,
            _params: &[(&str, &str)],
        ) -> Result<ListResponse<Product>, ApiError> {
            self.products.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn get_categories(
            &self,
            _params: &[(&str, &str)],
        ) -> Result<ListResponse<ProductCategory>, ApiError> {
            unscripted()
        }

        async fn create_product(&self, _data: &ProductPayload) -> Result<Product, ApiError> {
            self.product_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn update_product(
            &self,
            _id: u64,
            _data: &ProductPayload,
        ) -> Result<Product, ApiError> {
            self.product_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn delete_product(&self, _id: u64) -> Result<(), ApiError> {
            self.delete_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn adjust_stock(
            &self,
            _id: u64,
            _data: &StockAdjustment,
        ) -> Result<Product, ApiError> {
            self.product_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn restock_product(
            &self,
            _id: u64,
            _data: &StockAdjustment,
        ) -> Result<Product, ApiError> {
            self.product_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn get_stock_movements(
            &self,
            _params: &[(&str, &str)],
        ) -> Result<ListResponse<StockMovement>, ApiError> {
            unscripted()
        }

        async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
            unscripted()
        }
    }

    fn test_store() -> (InventoryStore<FakeInventoryApi>, Rc<RecordingToaster>) {
        let toaster = Rc::new(RecordingToaster::new());
        let store = InventoryStore::new(FakeInventoryApi::default(), toaster.clone());
        (store, toaster)
    }

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    fn payload(name: &str) -> ProductPayload {
        ProductPayload {
            name: name.to_string(),
            category: 1,
            cost_price: 10.0,
            selling_price: 15.0,
            current_stock: 5.0,
            minimum_stock_level: 2.0,
            sku: None,
            description: None,
            unit_of_measurement: None,
        }
    }

    #[test]
    fn out_of_stock_view_filters_by_flag() {
        let (store, _) = test_store();
        cache::replace_all(
            &mut store.products.borrow_mut(),
            vec![
                product(json!({"id": 5, "current_stock": 0, "is_out_of_stock": true})),
                product(json!({"id": 6, "current_stock": 3, "is_out_of_stock": false})),
            ],
        );

        let out = store.out_of_stock_products();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 5);
    }

    #[test]
    fn low_stock_view_filters_by_flag() {
        let (store, _) = test_store();
        cache::replace_all(
            &mut store.products.borrow_mut(),
            vec![
                product(json!({"id": 1, "is_low_stock": true})),
                product(json!({"id": 2, "is_low_stock": false})),
            ],
        );

        let low = store.low_stock_products();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, 1);
    }

    #[test]
    fn inventory_value_sums_stock_times_cost() {
        let (store, _) = test_store();
        cache::replace_all(
            &mut store.products.borrow_mut(),
            vec![
                product(json!({"id": 1, "current_stock": 2, "cost_price": "10.50"})),
                product(json!({"id": 2, "current_stock": 3, "cost_price": 4})),
            ],
        );

        assert_eq!(store.total_inventory_value(), 2.0 * 10.5 + 3.0 * 4.0);
    }

    #[test]
    fn decimal_strings_from_backend_are_accepted() {
        let p = product(json!({
            "id": 7,
            "name": "Rice 5kg",
            "cost_price": "1500.00",
            "selling_price": "1800.00",
            "current_stock": "12.00",
            "is_low_stock": false,
            "is_out_of_stock": false
        }));
        assert_eq!(p.cost_price, 1500.0);
        assert_eq!(p.current_stock, 12.0);
    }

    #[test]
    fn fetch_products_replaces_cache_and_clears_loading() {
        let (store, _) = test_store();
        cache::replace_all(
            &mut store.products.borrow_mut(),
            vec![product(json!({"id": 1}))],
        );
        *store.api.products.borrow_mut() = Some(Ok(ListResponse::Plain(vec![
            product(json!({"id": 2})),
            product(json!({"id": 3})),
        ])));

        let result = block_on(store.fetch_products(&[]));

        assert_eq!(result.unwrap().len(), 2);
        assert!(!store.is_loading());
        let cached = store.products();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].id, 2);
    }

    #[test]
    fn failed_fetch_clears_loading_and_toasts() {
        let (store, toaster) = test_store();
        *store.api.products.borrow_mut() = Some(Err(ApiError::Network("down".to_string())));

        let result = block_on(store.fetch_products(&[]));

        assert!(result.is_err());
        assert!(!store.is_loading());
        assert!(store.products().is_empty());
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Error, "Failed to fetch products".to_string())]
        );
    }

    #[test]
    fn create_product_prepends_and_toasts_success() {
        let (store, toaster) = test_store();
        cache::replace_all(
            &mut store.products.borrow_mut(),
            vec![product(json!({"id": 1}))],
        );
        *store.api.product_result.borrow_mut() = Some(Ok(product(json!({"id": 9}))));

        let created = block_on(store.create_product(&payload("Beans 1kg"))).unwrap();

        assert_eq!(created.id, 9);
        let cached = store.products();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].id, 9);
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Success, "Product created successfully!".to_string())]
        );
    }

    #[test]
    fn create_failure_prefers_server_message() {
        let (store, toaster) = test_store();
        *store.api.product_result.borrow_mut() = Some(Err(ApiError::Status {
            status: 400,
            message: Some("SKU already exists".to_string()),
        }));

        assert!(block_on(store.create_product(&payload("Dup"))).is_err());
        assert!(store.products().is_empty());
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Error, "SKU already exists".to_string())]
        );
    }

    #[test]
    fn delete_product_removes_from_cache() {
        let (store, _) = test_store();
        cache::replace_all(
            &mut store.products.borrow_mut(),
            vec![product(json!({"id": 5})), product(json!({"id": 6}))],
        );
        *store.api.delete_result.borrow_mut() = Some(Ok(()));

        block_on(store.delete_product(5)).unwrap();

        let cached = store.products();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id, 6);
    }
}
