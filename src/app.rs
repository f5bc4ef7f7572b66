// ============================================================================
// APP - Raíz de composición: transporte, api maps y stores compartidos
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::services::api::{
    AiApi, AnalyticsApi, AuthApi, InventoryApi, LoanApi, NotificationApi, SavingsApi,
    TransactionApi,
};
use crate::services::http::{ApiClient, BrowserRedirect};
use crate::services::toast::{DomToaster, Toaster};
use crate::stores::{
    AuthStore, InventoryStore, NotificationStore, OfflineStore, TransactionStore,
};
use crate::utils::storage::BrowserCredentials;

/// Grafo de la aplicación: un único ApiClient compartido por todos los
/// endpoint maps y los stores que dependen de ellos
pub struct App {
    pub auth: Rc<AuthStore>,
    pub inventory: Rc<InventoryStore>,
    pub transactions: Rc<TransactionStore>,
    pub notifications: Rc<NotificationStore>,
    pub offline: Rc<OfflineStore>,
    // Dominios sin caché local: las páginas los consumen directo
    pub loans: LoanApi,
    pub savings: SavingsApi,
    pub analytics: AnalyticsApi,
    pub ai: AiApi,
}

impl App {
    pub fn new() -> Self {
        let toaster: Rc<dyn Toaster> = Rc::new(DomToaster);
        let credentials = Rc::new(BrowserCredentials);

        let client = Rc::new(ApiClient::new(
            CONFIG.api_base(),
            CONFIG.network_timeout_ms(),
            credentials.clone(),
            toaster.clone(),
            Rc::new(BrowserRedirect),
        ));

        log::info!("🔧 API base: {}", CONFIG.api_base());

        let auth = Rc::new(AuthStore::new(
            AuthApi::new(client.clone()),
            toaster.clone(),
            credentials,
        ));
        let inventory = Rc::new(InventoryStore::new(
            InventoryApi::new(client.clone()),
            toaster.clone(),
        ));
        let transactions = Rc::new(TransactionStore::new(
            TransactionApi::new(client.clone()),
            toaster.clone(),
        ));
        let notifications = Rc::new(NotificationStore::new(
            NotificationApi::new(client.clone()),
            toaster.clone(),
        ));
        let offline = Rc::new(OfflineStore::new(toaster));

        Self {
            auth,
            inventory,
            transactions,
            notifications,
            offline,
            loans: LoanApi::new(client.clone()),
            savings: SavingsApi::new(client.clone()),
            analytics: AnalyticsApi::new(client.clone()),
            ai: AiApi::new(client),
        }
    }

    /// Arranque: registra los listeners de red y rehidrata la sesión
    /// persistida antes de que cualquier vista pida datos
    pub async fn start(&self) {
        self.offline.initialize();

        if self.auth.initialize().await {
            log::info!("✅ Sesión activa al arrancar");
        } else {
            log::info!("ℹ️ Sin sesión persistida");
        }
    }
}
