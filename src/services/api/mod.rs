// Mapas de endpoints por dominio: cada operación es una traducción pura
// de argumentos a (verbo, ruta, payload|query) delegada al ApiClient.
// Sin estado, sin caché, sin manejo de errores propio.

pub mod ai;
pub mod analytics;
pub mod auth;
pub mod inventory;
pub mod loans;
pub mod notifications;
pub mod savings;
pub mod transactions;

pub use ai::AiApi;
pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use inventory::InventoryApi;
pub use loans::LoanApi;
pub use notifications::NotificationApi;
pub use savings::SavingsApi;
pub use transactions::TransactionApi;
