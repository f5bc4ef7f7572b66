use std::rc::Rc;

use serde_json::Value;

use crate::models::{
    BusinessProfile, Guarantor, ListResponse, LoginRequest, RegisterRequest, SessionResponse, User,
};
use crate::services::error::ApiError;
use crate::services::http::ApiClient;

pub struct AuthApi {
    client: Rc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    // Autenticación
    pub async fn login(&self, credentials: &LoginRequest) -> Result<SessionResponse, ApiError> {
        self.client.post("/users/login/", credentials).await
    }

    pub async fn register(&self, data: &RegisterRequest) -> Result<SessionResponse, ApiError> {
        self.client.post("/users/register/", data).await
    }

    pub async fn logout(&self) -> Result<Value, ApiError> {
        self.client.post_empty("/users/logout/").await
    }

    // Perfil
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        self.client.get("/users/profile/").await
    }

    pub async fn update_profile(&self, data: &Value) -> Result<User, ApiError> {
        self.client.put("/users/profile/", data).await
    }

    // Gestión de usuarios (solo admin)
    pub async fn get_users(&self, params: &[(&str, &str)]) -> Result<ListResponse<User>, ApiError> {
        self.client.get_query("/users/users/", params).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        self.client.get(&format!("/users/users/{}/", id)).await
    }

    pub async fn update_user(&self, id: u64, data: &Value) -> Result<User, ApiError> {
        self.client.put(&format!("/users/users/{}/", id), data).await
    }

    pub async fn verify_user(&self, id: u64, data: &Value) -> Result<User, ApiError> {
        self.client.post(&format!("/users/users/{}/verify/", id), data).await
    }

    pub async fn get_dashboard_stats(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("/users/users/{}/dashboard_stats/", id)).await
    }

    // Perfil de negocio
    pub async fn get_business_profiles(&self) -> Result<ListResponse<BusinessProfile>, ApiError> {
        self.client.get("/users/business-profiles/").await
    }

    pub async fn create_business_profile(&self, data: &Value) -> Result<BusinessProfile, ApiError> {
        self.client.post("/users/business-profiles/", data).await
    }

    pub async fn update_business_profile(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<BusinessProfile, ApiError> {
        self.client.put(&format!("/users/business-profiles/{}/", id), data).await
    }

    pub async fn verify_business_profile(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<BusinessProfile, ApiError> {
        self.client
            .post(&format!("/users/business-profiles/{}/verify/", id), data)
            .await
    }

    // Garantes
    pub async fn get_guarantors(&self) -> Result<ListResponse<Guarantor>, ApiError> {
        self.client.get("/users/guarantors/").await
    }

    pub async fn create_guarantor(&self, data: &Value) -> Result<Guarantor, ApiError> {
        self.client.post("/users/guarantors/", data).await
    }

    pub async fn update_guarantor(&self, id: u64, data: &Value) -> Result<Guarantor, ApiError> {
        self.client.put(&format!("/users/guarantors/{}/", id), data).await
    }

    pub async fn delete_guarantor(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/users/guarantors/{}/", id)).await
    }
}
