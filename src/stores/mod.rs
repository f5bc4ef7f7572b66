pub mod auth_store;
pub mod cache;
pub mod inventory_store;
pub mod notification_store;
pub mod offline_store;
pub mod transaction_store;

pub use auth_store::{AuthGateway, AuthStore};
pub use inventory_store::{InventoryGateway, InventoryStore};
pub use notification_store::{NotificationGateway, NotificationStore};
pub use offline_store::OfflineStore;
pub use transaction_store::{TransactionGateway, TransactionStore};
