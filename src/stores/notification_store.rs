// ============================================================================
// NOTIFICATION STORE - Caché local de notificaciones y preferencias
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Utc;
use serde_json::Value;

use crate::models::{
    ListResponse, Notification, NotificationPayload, NotificationPreference, ToggleChannelRequest,
};
use crate::services::api::NotificationApi;
use crate::services::error::ApiError;
use crate::services::toast::Toaster;
use crate::stores::cache;

/// Operaciones de red del store de notificaciones, sustituibles en tests
pub trait NotificationGateway {
    async fn get_notifications(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Notification>, ApiError>;
    async fn get_preferences(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<NotificationPreference>, ApiError>;
    async fn mark_notification_read(&self, id: u64) -> Result<Value, ApiError>;
    async fn mark_all_notifications_read(&self) -> Result<Value, ApiError>;
    async fn create_notification(
        &self,
        data: &NotificationPayload,
    ) -> Result<Notification, ApiError>;
    async fn update_preference(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<NotificationPreference, ApiError>;
    async fn toggle_channel(
        &self,
        id: u64,
        data: &ToggleChannelRequest,
    ) -> Result<NotificationPreference, ApiError>;
}

impl NotificationGateway for NotificationApi {
    async fn get_notifications(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Notification>, ApiError> {
        NotificationApi::get_notifications(self, params).await
    }

    async fn get_preferences(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<NotificationPreference>, ApiError> {
        NotificationApi::get_preferences(self, params).await
    }

    async fn mark_notification_read(&self, id: u64) -> Result<Value, ApiError> {
        NotificationApi::mark_notification_read(self, id).await
    }

    async fn mark_all_notifications_read(&self) -> Result<Value, ApiError> {
        NotificationApi::mark_all_notifications_read(self).await
    }

    async fn create_notification(
        &self,
        data: &NotificationPayload,
    ) -> Result<Notification, ApiError> {
        NotificationApi::create_notification(self, data).await
    }

    async fn update_preference(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<NotificationPreference, ApiError> {
        NotificationApi::update_preference(self, id, data).await
    }

    async fn toggle_channel(
        &self,
        id: u64,
        data: &ToggleChannelRequest,
    ) -> Result<NotificationPreference, ApiError> {
        NotificationApi::toggle_channel(self, id, data).await
    }
}

pub struct NotificationStore<A = NotificationApi> {
    api: A,
    toaster: Rc<dyn Toaster>,
    notifications: RefCell<Vec<Notification>>,
    preferences: RefCell<Vec<NotificationPreference>>,
    is_loading: Cell<bool>,
}

impl<A: NotificationGateway> NotificationStore<A> {
    pub fn new(api: A, toaster: Rc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            notifications: RefCell::new(Vec::new()),
            preferences: RefCell::new(Vec::new()),
            is_loading: Cell::new(false),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    pub fn preferences(&self) -> Vec<NotificationPreference> {
        self.preferences.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    // ------------------------------------------------------------------
    // Vistas derivadas
    // ------------------------------------------------------------------

    pub fn unread_notifications(&self) -> Vec<Notification> {
        self.notifications
            .borrow()
            .iter()
            .filter(|n| !n.is_read)
            .cloned()
            .collect()
    }

    pub fn urgent_notifications(&self) -> Vec<Notification> {
        self.notifications
            .borrow()
            .iter()
            .filter(|n| n.is_urgent() && !n.is_read)
            .cloned()
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.borrow().iter().filter(|n| !n.is_read).count()
    }

    // ------------------------------------------------------------------
    // Operaciones
    // ------------------------------------------------------------------

    pub async fn fetch_notifications(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Vec<Notification>, ApiError> {
        self.is_loading.set(true);
        let result = self.api.get_notifications(params).await;
        self.is_loading.set(false);

        match result {
            Ok(response) => {
                let items = response.into_items();
                log::info!("🔔 Notificaciones cargadas: {}", items.len());
                cache::replace_all(&mut self.notifications.borrow_mut(), items.clone());
                Ok(items)
            }
            Err(err) => {
                self.toaster.error("Failed to fetch notifications");
                Err(err)
            }
        }
    }

    pub async fn fetch_preferences(&self) -> Result<Vec<NotificationPreference>, ApiError> {
        match self.api.get_preferences(&[]).await {
            Ok(response) => {
                let items = response.into_items();
                cache::replace_all(&mut self.preferences.borrow_mut(), items.clone());
                Ok(items)
            }
            Err(err) => {
                self.toaster.error("Failed to fetch notification preferences");
                Err(err)
            }
        }
    }

    /// Marca como leída en el servidor y refleja el cambio in situ en la
    /// caché (la respuesta del action no se usa)
    pub async fn mark_as_read(&self, id: u64) -> Result<(), ApiError> {
        match self.api.mark_notification_read(id).await {
            Ok(_) => {
                if let Some(notification) = self
                    .notifications
                    .borrow_mut()
                    .iter_mut()
                    .find(|n| n.id == id)
                {
                    notification.is_read = true;
                    notification.read_at = Some(Utc::now());
                }
                self.toaster.success("Notification marked as read");
                Ok(())
            }
            Err(err) => {
                self.toaster.error("Failed to mark notification as read");
                Err(err)
            }
        }
    }

    pub async fn mark_all_as_read(&self) -> Result<(), ApiError> {
        match self.api.mark_all_notifications_read().await {
            Ok(_) => {
                let now = Utc::now();
                for notification in self.notifications.borrow_mut().iter_mut() {
                    notification.is_read = true;
                    notification.read_at = Some(now);
                }
                self.toaster.success("All notifications marked as read");
                Ok(())
            }
            Err(err) => {
                self.toaster.error("Failed to mark all notifications as read");
                Err(err)
            }
        }
    }

    pub async fn create_notification(
        &self,
        data: &NotificationPayload,
    ) -> Result<Notification, ApiError> {
        match self.api.create_notification(data).await {
            Ok(notification) => {
                cache::prepend(&mut self.notifications.borrow_mut(), notification.clone());
                self.toaster.success("Notification created successfully!");
                Ok(notification)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to create notification"));
                Err(err)
            }
        }
    }

    pub async fn update_preference(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<NotificationPreference, ApiError> {
        match self.api.update_preference(id, data).await {
            Ok(preference) => {
                cache::replace_by_id(&mut self.preferences.borrow_mut(), preference.clone());
                self.toaster.success("Notification preference updated!");
                Ok(preference)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Failed to update preference"));
                Err(err)
            }
        }
    }

    /// Toggle de canal: actualiza en silencio (sin toast de éxito)
    pub async fn toggle_channel(
        &self,
        id: u64,
        channel: &str,
    ) -> Result<NotificationPreference, ApiError> {
        let request = ToggleChannelRequest {
            channel: channel.to_string(),
        };
        match self.api.toggle_channel(id, &request).await {
            Ok(preference) => {
                cache::replace_by_id(&mut self.preferences.borrow_mut(), preference.clone());
                Ok(preference)
            }
            Err(err) => {
                self.toaster.error("Failed to toggle notification channel");
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
    struct FakeNotificationApi {
        notifications: RefCell<Option<Result<ListResponse<Notification>, ApiError>>>,
        action_result: RefCell<Option<Result<Value, ApiError>>>,
        preference_result: RefCell<Option<Result<NotificationPreference, ApiError>>>,
    }

    fn unscripted<T>() -> Result<T, ApiError> {
        Err(ApiError::Unexpected("no response scripted".to_string()))
    }

    impl NotificationGateway for FakeNotificationApi {
        async fn get_notifications(
            &self,
            _params: &[(&str, &str)],
        ) -> Result<ListResponse<Notification>, ApiError> {
            self.notifications.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn get_preferences(
            &self,
            _params: &[(&str, &str)],
        ) -> Result<ListResponse<NotificationPreference>, ApiError> {
            unscripted()
        }

        async fn mark_notification_read(&self, _id: u64) -> Result<Value, ApiError> {
            self.action_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn mark_all_notifications_read(&self) -> Result<Value, ApiError> {
            self.action_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn create_notification(
            &self,
            _data: &NotificationPayload,
        ) -> Result<Notification, ApiError> {
            unscripted()
        }

        async fn update_preference(
            &self,
            _id: u64,
            _data: &Value,
        ) -> Result<NotificationPreference, ApiError> {
            self.preference_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn toggle_channel(
            &self,
            _id: u64,
            _data: &ToggleChannelRequest,
        ) -> Result<NotificationPreference, ApiError> {
            self.preference_result.borrow_mut().take().unwrap_or_else(unscripted)
        }
    }

    fn test_store() -> (NotificationStore<FakeNotificationApi>, Rc<RecordingToaster>) {
        let toaster = Rc::new(RecordingToaster::new());
        let store = NotificationStore::new(FakeNotificationApi::default(), toaster.clone());
        (store, toaster)
    }

    fn notification(id: u64, priority: &str, is_read: bool) -> Notification {
        serde_json::from_value(json!({
            "id": id,
            "title": "t",
            "priority": priority,
            "is_read": is_read,
        }))
        .unwrap()
    }

    #[test]
    fn unread_views_filter_read_state() {
        let (store, _) = test_store();
        cache::replace_all(
            &mut store.notifications.borrow_mut(),
            vec![
                notification(1, "medium", false),
                notification(2, "urgent", false),
                notification(3, "urgent", true),
            ],
        );

        assert_eq!(store.unread_count(), 2);
        let urgent = store.urgent_notifications();
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].id, 2);
    }

    #[test]
    fn failed_fetch_clears_loading_and_toasts() {
        let (store, toaster) = test_store();
        *store.api.notifications.borrow_mut() =
            Some(Err(ApiError::Network("down".to_string())));

        let result = block_on(store.fetch_notifications(&[]));

        assert!(result.is_err());
        assert!(!store.is_loading());
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Error, "Failed to fetch notifications".to_string())]
        );
    }

    #[test]
    fn fetch_notifications_replaces_cache() {
        let (store, _) = test_store();
        cache::replace_all(
            &mut store.notifications.borrow_mut(),
            vec![notification(1, "medium", true)],
        );
        *store.api.notifications.borrow_mut() = Some(Ok(ListResponse::Plain(vec![
            notification(2, "urgent", false),
        ])));

        block_on(store.fetch_notifications(&[])).unwrap();

        assert!(!store.is_loading());
        let cached = store.notifications();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id, 2);
    }

    #[test]
    fn mark_as_read_mutates_cached_record_in_place() {
        let (store, toaster) = test_store();
        cache::replace_all(
            &mut store.notifications.borrow_mut(),
            vec![notification(1, "medium", false), notification(2, "low", false)],
        );
        *store.api.action_result.borrow_mut() = Some(Ok(json!({"status": "read"})));

        block_on(store.mark_as_read(1)).unwrap();

        let cached = store.notifications();
        assert!(cached[0].is_read);
        assert!(cached[0].read_at.is_some());
        assert!(!cached[1].is_read);
        assert_eq!(store.unread_count(), 1);
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Success, "Notification marked as read".to_string())]
        );
    }

    #[test]
    fn failed_mark_as_read_leaves_cache_untouched() {
        let (store, _) = test_store();
        cache::replace_all(
            &mut store.notifications.borrow_mut(),
            vec![notification(1, "medium", false)],
        );
        *store.api.action_result.borrow_mut() = Some(Err(ApiError::Timeout));

        assert!(block_on(store.mark_as_read(1)).is_err());
        assert!(!store.notifications()[0].is_read);
        assert_eq!(store.unread_count(), 1);
    }
}
