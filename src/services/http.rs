// ============================================================================
// API CLIENT - Transporte HTTP único de toda la app
// ============================================================================
// Equivale a los interceptores del cliente clásico:
// - saliente: adjunta el token persistido en Authorization (sin opt-out)
// - entrante: devuelve solo el payload JSON; ante un fallo clasifica,
//   emite EXACTAMENTE una notificación global y re-lanza al caller.
// Sin reintentos ni backoff; el timeout es el único límite de vida de
// una llamada y una vez despachada no se puede cancelar.
// ============================================================================

use std::rc::Rc;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::services::error::{extract_server_message, toast_text, ApiError};
use crate::services::toast::Toaster;
use crate::utils::constants::{AUTH_SCHEME, LOGIN_PATH};
use crate::utils::storage::CredentialStore;

/// Capacidad de navegación forzada al login (efecto del 401)
pub trait AuthRedirect {
    fn to_login(&self);
}

pub struct BrowserRedirect;

impl AuthRedirect for BrowserRedirect {
    fn to_login(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}

pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    credentials: Rc<dyn CredentialStore>,
    toaster: Rc<dyn Toaster>,
    redirect: Rc<dyn AuthRedirect>,
}

impl ApiClient {
    pub fn new(
        base_url: String,
        timeout_ms: u32,
        credentials: Rc<dyn CredentialStore>,
        toaster: Rc<dyn Toaster>,
        redirect: Rc<dyn AuthRedirect>,
    ) -> Self {
        Self {
            base_url,
            timeout_ms,
            credentials,
            toaster,
            redirect,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.build(Request::get(&self.url(path)))?;
        let response = self.dispatch(request).await?;
        self.read_json(response).await
    }

    /// GET con query-string de filtros/paginación (pasa los pares tal cual)
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let builder = Request::get(&self.url(path)).query(params.iter().copied());
        let request = self.build(builder)?;
        let response = self.dispatch(request).await?;
        self.read_json(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.build_json(Request::post(&self.url(path)), body)?;
        let response = self.dispatch(request).await?;
        self.read_json(response).await
    }

    /// POST de acción sin cuerpo (mark_read, disburse, pause, ...)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.build(Request::post(&self.url(path)))?;
        let response = self.dispatch(request).await?;
        self.read_json(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.build_json(Request::put(&self.url(path)), body)?;
        let response = self.dispatch(request).await?;
        self.read_json(response).await
    }

    /// DELETE devuelve 204 sin cuerpo
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.build(Request::delete(&self.url(path)))?;
        self.dispatch(request).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Interceptor saliente: token persistido → header Authorization.
    /// Corre en TODAS las requests, no hay opt-out por llamada.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match self.credentials.load() {
            Some(token) => builder.header(
                "Authorization",
                &format!("{} {}", AUTH_SCHEME, token),
            ),
            None => builder,
        }
    }

    fn build(&self, builder: RequestBuilder) -> Result<Request, ApiError> {
        self.authorize(builder).build().map_err(|e| {
            let err = ApiError::Unexpected(format!("request build error: {}", e));
            self.report(&err);
            err
        })
    }

    fn build_json<B: Serialize + ?Sized>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Request, ApiError> {
        self.authorize(builder).json(body).map_err(|e| {
            let err = ApiError::Unexpected(format!("request build error: {}", e));
            self.report(&err);
            err
        })
    }

    /// Envía la request con timeout acotado y clasifica el resultado
    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        let send = request.send();
        let timeout = TimeoutFuture::new(self.timeout_ms);
        pin_mut!(send);
        pin_mut!(timeout);

        let outcome = match select(send, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|e| ApiError::Network(e.to_string()))
            }
            Either::Right(((), _)) => Err(ApiError::Timeout),
        };

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                self.report(&err);
                return Err(err);
            }
        };

        if response.ok() {
            return Ok(response);
        }

        // Interceptor entrante, rama de error: rescatar el mensaje del
        // servidor antes de notificar y re-lanzar
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| extract_server_message(&body));
        let err = ApiError::Status { status, message };
        self.report(&err);
        Err(err)
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        match response.json::<T>().await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                let err = ApiError::Unexpected(format!("malformed response body: {}", e));
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Efectos globales de un fallo: un toast, y para el 401 además se
    /// limpia la credencial y se fuerza la vuelta al login. Siempre se
    /// re-lanza después; nunca se traga un error.
    pub(crate) fn report(&self, error: &ApiError) {
        log::error!("❌ API error: {}", error);
        self.toaster.error(&toast_text(error));

        if error.status() == Some(401) {
            self.credentials.clear();
            self.redirect.to_login();
        }
    }
}

#[cfg(test)]
pub struct RecordingRedirect(pub std::cell::Cell<u32>);

#[cfg(test)]
impl RecordingRedirect {
    pub fn new() -> Self {
        Self(std::cell::Cell::new(0))
    }
}

#[cfg(test)]
impl AuthRedirect for RecordingRedirect {
    fn to_login(&self) {
        self.0.set(self.0.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::toast::{RecordingToaster, ToastLevel};
    use crate::utils::storage::{CredentialStore, MemoryCredentials};

    fn client_with(
        credentials: Rc<MemoryCredentials>,
        toaster: Rc<RecordingToaster>,
        redirect: Rc<RecordingRedirect>,
    ) -> ApiClient {
        ApiClient::new(
            "http://localhost:8000/api".to_string(),
            10_000,
            credentials,
            toaster,
            redirect,
        )
    }

    #[test]
    fn unauthorized_clears_credential_and_redirects() {
        let credentials = Rc::new(MemoryCredentials::with_token("T"));
        let toaster = Rc::new(RecordingToaster::new());
        let redirect = Rc::new(RecordingRedirect::new());
        let client = client_with(credentials.clone(), toaster.clone(), redirect.clone());

        client.report(&ApiError::Status { status: 401, message: None });

        assert_eq!(credentials.load(), None);
        assert_eq!(redirect.0.get(), 1);
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Error, "Authentication required".to_string())]
        );
    }

    #[test]
    fn other_statuses_only_toast() {
        let credentials = Rc::new(MemoryCredentials::with_token("T"));
        let toaster = Rc::new(RecordingToaster::new());
        let redirect = Rc::new(RecordingRedirect::new());
        let client = client_with(credentials.clone(), toaster.clone(), redirect.clone());

        client.report(&ApiError::Status {
            status: 422,
            message: Some("Invalid price".to_string()),
        });

        assert_eq!(credentials.load(), Some("T".to_string()));
        assert_eq!(redirect.0.get(), 0);
        assert_eq!(
            toaster.messages(),
            vec![(ToastLevel::Error, "Invalid price".to_string())]
        );
    }

    #[test]
    fn connection_failure_toasts_connectivity_text() {
        let credentials = Rc::new(MemoryCredentials::new());
        let toaster = Rc::new(RecordingToaster::new());
        let redirect = Rc::new(RecordingRedirect::new());
        let client = client_with(credentials, toaster.clone(), redirect);

        client.report(&ApiError::Network("fetch failed".to_string()));

        assert_eq!(
            toaster.messages(),
            vec![(
                ToastLevel::Error,
                "Network error - please check your connection".to_string()
            )]
        );
    }
}
