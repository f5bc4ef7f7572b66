// ============================================================================
// AUTH STORE - Sesión en memoria + token persistido en lockstep
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::Value;

use crate::models::{LoginRequest, RegisterRequest, SessionResponse, User};
use crate::services::api::AuthApi;
use crate::services::error::ApiError;
use crate::services::toast::Toaster;
use crate::utils::storage::CredentialStore;

/// Operaciones de red del store de sesión, sustituibles en tests
pub trait AuthGateway {
    async fn login(&self, credentials: &LoginRequest) -> Result<SessionResponse, ApiError>;
    async fn register(&self, data: &RegisterRequest) -> Result<SessionResponse, ApiError>;
    async fn logout(&self) -> Result<Value, ApiError>;
    async fn get_profile(&self) -> Result<User, ApiError>;
    async fn update_profile(&self, data: &Value) -> Result<User, ApiError>;
}

impl AuthGateway for AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<SessionResponse, ApiError> {
        AuthApi::login(self, credentials).await
    }

    async fn register(&self, data: &RegisterRequest) -> Result<SessionResponse, ApiError> {
        AuthApi::register(self, data).await
    }

    async fn logout(&self) -> Result<Value, ApiError> {
        AuthApi::logout(self).await
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        AuthApi::get_profile(self).await
    }

    async fn update_profile(&self, data: &Value) -> Result<User, ApiError> {
        AuthApi::update_profile(self, data).await
    }
}

pub struct AuthStore<A = AuthApi> {
    api: A,
    toaster: Rc<dyn Toaster>,
    credentials: Rc<dyn CredentialStore>,
    token: RefCell<Option<String>>,
    user: RefCell<Option<User>>,
    is_loading: Cell<bool>,
}

impl<A: AuthGateway> AuthStore<A> {
    /// El token en memoria arranca sembrado desde el slot persistido,
    /// así la sesión sobrevive recargas de página
    pub fn new(api: A, toaster: Rc<dyn Toaster>, credentials: Rc<dyn CredentialStore>) -> Self {
        let token = credentials.load();
        Self {
            api,
            toaster,
            credentials,
            token: RefCell::new(token),
            user: RefCell::new(None),
            is_loading: Cell::new(false),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    /// Autenticado = token Y usuario presentes; un token huérfano (sin
    /// perfil cargado) no cuenta como sesión
    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some() && self.user.borrow().is_some()
    }

    // ------------------------------------------------------------------
    // Transiciones de sesión
    // ------------------------------------------------------------------

    fn apply_session(&self, session: SessionResponse) -> User {
        self.credentials.save(&session.token);
        *self.token.borrow_mut() = Some(session.token);
        *self.user.borrow_mut() = Some(session.user.clone());
        session.user
    }

    fn clear_session(&self) {
        self.credentials.clear();
        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
    }

    /// Rehidrata la sesión al arrancar: si hay token persistido se pide
    /// el perfil; si el token ya no sirve, se limpia todo
    pub async fn initialize(&self) -> bool {
        if self.token.borrow().is_none() {
            return false;
        }

        match self.api.get_profile().await {
            Ok(user) => {
                log::info!("👤 Sesión restaurada: usuario {}", user.id);
                *self.user.borrow_mut() = Some(user);
                true
            }
            Err(err) => {
                log::warn!("⚠️ Token persistido inválido: {}", err);
                self.clear_session();
                false
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        self.is_loading.set(true);
        let result = self.api.login(&request).await;
        self.is_loading.set(false);

        match result {
            Ok(session) => {
                let user = self.apply_session(session);
                self.toaster.success("Login successful!");
                Ok(user)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Login failed"));
                Err(err)
            }
        }
    }

    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.is_loading.set(true);
        let result = self.api.register(data).await;
        self.is_loading.set(false);

        match result {
            Ok(session) => {
                let user = self.apply_session(session);
                self.toaster.success("Registration successful!");
                Ok(user)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Registration failed"));
                Err(err)
            }
        }
    }

    /// El POST remoto es best-effort: la sesión local se limpia aunque
    /// el servidor no responda. Sin toast; la redirección al login ya
    /// comunica el cambio de estado.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            log::warn!("⚠️ Logout remoto falló: {}", err);
        }
        self.clear_session();
    }

    pub async fn update_profile(&self, data: &Value) -> Result<User, ApiError> {
        match self.api.update_profile(data).await {
            Ok(user) => {
                *self.user.borrow_mut() = Some(user.clone());
                self.toaster.success("Profile updated successfully!");
                Ok(user)
            }
            Err(err) => {
                self.toaster.error(err.message_or("Profile update failed"));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::toast::{RecordingToaster, ToastLevel};
    use crate::utils::storage::MemoryCredentials;
    use futures::executor::block_on;
    use serde_json::json;

    #[derive(Default)]
    struct FakeAuthApi {
        session_result: RefCell<Option<Result<SessionResponse, ApiError>>>,
        logout_result: RefCell<Option<Result<Value, ApiError>>>,
        profile_result: RefCell<Option<Result<User, ApiError>>>,
    }

    fn unscripted<T>() -> Result<T, ApiError> {
        Err(ApiError::Unexpected("no response scripted".to_string()))
    }

    impl AuthGateway for FakeAuthApi {
        async fn login(&self, _credentials: &LoginRequest) -> Result<SessionResponse, ApiError> {
            self.session_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn register(&self, _data: &RegisterRequest) -> Result<SessionResponse, ApiError> {
            self.session_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn logout(&self) -> Result<Value, ApiError> {
            self.logout_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn get_profile(&self) -> Result<User, ApiError> {
            self.profile_result.borrow_mut().take().unwrap_or_else(unscripted)
        }

        async fn update_profile(&self, _data: &Value) -> Result<User, ApiError> {
            self.profile_result.borrow_mut().take().unwrap_or_else(unscripted)
        }
    }

    fn test_store(
        credentials: Rc<MemoryCredentials>,
    ) -> (AuthStore<FakeAuthApi>, Rc<RecordingToaster>) {
        let toaster = Rc::new(RecordingToaster::new());
        let store = AuthStore::new(FakeAuthApi::default(), toaster.clone(), credentials);
        (store, toaster)
    }

    fn session(token: &str, user_id: u64) -> SessionResponse {
        serde_json::from_value(json!({
            "token": token,
            "user": {"id": user_id},
        }))
        .unwrap()
    }

    #[test]
    fn new_store_seeds_token_from_persisted_slot() {
        let credentials = Rc::new(MemoryCredentials::with_token("persisted"));
        let (store, _) = test_store(credentials);
        assert_eq!(store.token().as_deref(), Some("persisted"));
        // Token sin usuario cargado todavía no es sesión completa
        assert!(!store.is_authenticated());
    }

    #[test]
    fn login_persists_token_and_sets_user() {
        let credentials = Rc::new(MemoryCredentials::new());
        let (store, toaster) = test_store(credentials.clone());
        *store.api.session_result.borrow_mut() = Some(Ok(session("T", 1)));

        let user = block_on(store.login("amina", "secret")).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(credentials.load().as_deref(), Some("T"));
        assert_eq!(store.token().as_deref(), Some("T"));
        assert!(store.is_authenticated());
        assert!(!store.is_loading());
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Success, "Login successful!".to_string())]
        );
    }

    #[test]
    fn failed_login_clears_loading_and_leaves_no_session() {
        let credentials = Rc::new(MemoryCredentials::new());
        let (store, toaster) = test_store(credentials.clone());
        *store.api.session_result.borrow_mut() = Some(Err(ApiError::Status {
            status: 400,
            message: Some("Invalid credentials".to_string()),
        }));

        assert!(block_on(store.login("amina", "wrong")).is_err());

        assert!(!store.is_loading());
        assert!(credentials.load().is_none());
        assert!(!store.is_authenticated());
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Error, "Invalid credentials".to_string())]
        );
    }

    #[test]
    fn logout_clears_session_silently_even_if_remote_fails() {
        let credentials = Rc::new(MemoryCredentials::new());
        let (store, toaster) = test_store(credentials.clone());
        *store.api.session_result.borrow_mut() = Some(Ok(session("T", 4)));
        block_on(store.login("amina", "secret")).unwrap();
        *store.api.logout_result.borrow_mut() =
            Some(Err(ApiError::Network("down".to_string())));

        block_on(store.logout());

        assert!(credentials.load().is_none());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
        // Solo el toast del login; el logout no notifica
        assert_eq!(toaster.messages().len(), 1);
    }

    #[test]
    fn failed_profile_update_uses_fallback_text() {
        let credentials = Rc::new(MemoryCredentials::new());
        let (store, toaster) = test_store(credentials);
        *store.api.profile_result.borrow_mut() =
            Some(Err(ApiError::Network("down".to_string())));

        assert!(block_on(store.update_profile(&json!({"first_name": "A"}))).is_err());
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Error, "Profile update failed".to_string())]
        );
    }

    #[test]
    fn initialize_with_bad_token_clears_session() {
        let credentials = Rc::new(MemoryCredentials::with_token("stale"));
        let (store, _) = test_store(credentials.clone());
        *store.api.profile_result.borrow_mut() = Some(Err(ApiError::Status {
            status: 401,
            message: None,
        }));

        assert!(!block_on(store.initialize()));
        assert!(credentials.load().is_none());
        assert!(store.token().is_none());
    }
}
