use std::rc::Rc;

use serde_json::Value;

use crate::models::{
    ListResponse, Notification, NotificationPayload, NotificationPreference, ToggleChannelRequest,
};
use crate::services::error::ApiError;
use crate::services::http::ApiClient;

pub struct NotificationApi {
    client: Rc<ApiClient>,
}

impl NotificationApi {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    // Notificaciones
    pub async fn get_notifications(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<Notification>, ApiError> {
        self.client.get_query("/notifications/notifications/", params).await
    }

    pub async fn get_notification(&self, id: u64) -> Result<Notification, ApiError> {
        self.client.get(&format!("/notifications/notifications/{}/", id)).await
    }

    pub async fn create_notification(
        &self,
        data: &NotificationPayload,
    ) -> Result<Notification, ApiError> {
        self.client.post("/notifications/notifications/", data).await
    }

    pub async fn update_notification(&self, id: u64, data: &Value) -> Result<Notification, ApiError> {
        self.client.put(&format!("/notifications/notifications/{}/", id), data).await
    }

    pub async fn delete_notification(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/notifications/notifications/{}/", id)).await
    }

    pub async fn get_unread_notifications(&self) -> Result<ListResponse<Notification>, ApiError> {
        self.client.get("/notifications/notifications/unread/").await
    }

    pub async fn get_urgent_notifications(&self) -> Result<ListResponse<Notification>, ApiError> {
        self.client.get("/notifications/notifications/urgent/").await
    }

    pub async fn get_notifications_by_type(
        &self,
        notification_type: &str,
    ) -> Result<ListResponse<Notification>, ApiError> {
        self.client
            .get_query("/notifications/notifications/by_type/", &[("type", notification_type)])
            .await
    }

    pub async fn mark_notification_read(&self, id: u64) -> Result<Value, ApiError> {
        self.client
            .post_empty(&format!("/notifications/notifications/{}/mark_read/", id))
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<Value, ApiError> {
        self.client.post_empty("/notifications/notifications/mark_all_read/").await
    }

    pub async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/notifications/notifications/dashboard_stats/").await
    }

    pub async fn create_system_notification(&self, data: &Value) -> Result<Notification, ApiError> {
        self.client
            .post("/notifications/notifications/create_system_notification/", data)
            .await
    }

    pub async fn cleanup_expired_notifications(&self) -> Result<Value, ApiError> {
        self.client.post_empty("/notifications/notifications/cleanup_expired/").await
    }

    // Preferencias
    pub async fn get_preferences(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<NotificationPreference>, ApiError> {
        self.client.get_query("/notifications/preferences/", params).await
    }

    pub async fn get_preference(&self, id: u64) -> Result<NotificationPreference, ApiError> {
        self.client.get(&format!("/notifications/preferences/{}/", id)).await
    }

    pub async fn create_preference(&self, data: &Value) -> Result<NotificationPreference, ApiError> {
        self.client.post("/notifications/preferences/", data).await
    }

    pub async fn update_preference(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<NotificationPreference, ApiError> {
        self.client.put(&format!("/notifications/preferences/{}/", id), data).await
    }

    pub async fn delete_preference(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/notifications/preferences/{}/", id)).await
    }

    pub async fn get_active_preferences(
        &self,
    ) -> Result<ListResponse<NotificationPreference>, ApiError> {
        self.client.get("/notifications/preferences/active/").await
    }

    pub async fn bulk_update_preferences(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/notifications/preferences/bulk_update/", data).await
    }

    pub async fn get_preferences_summary(&self) -> Result<Value, ApiError> {
        self.client.get("/notifications/preferences/summary/").await
    }

    pub async fn toggle_channel(
        &self,
        id: u64,
        data: &ToggleChannelRequest,
    ) -> Result<NotificationPreference, ApiError> {
        self.client
            .post(&format!("/notifications/preferences/{}/toggle_channel/", id), data)
            .await
    }
}
