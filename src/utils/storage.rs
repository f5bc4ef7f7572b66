use web_sys::{window, Storage};

use crate::utils::constants::STORAGE_KEY_AUTH_TOKEN;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// ============================================================================
// CREDENCIAL PERSISTIDA - Único slot durable compartido entre componentes
// ============================================================================
// El token se guarda como string plano (no JSON) para ser legible desde
// cualquier otra pestaña o herramienta de debugging.

/// Capacidad inyectable sobre el slot del token de autenticación.
/// El transporte lo lee en cada request y lo limpia ante un 401;
/// el store de auth es el único que escribe.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Implementación sobre localStorage del navegador
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn load(&self) -> Option<String> {
        let storage = get_local_storage()?;
        storage.get_item(STORAGE_KEY_AUTH_TOKEN).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(STORAGE_KEY_AUTH_TOKEN, token).is_err() {
                log::error!("❌ No se pudo guardar el token en localStorage");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_AUTH_TOKEN);
        }
    }
}

/// Slot en memoria para tests (sin navegador)
#[cfg(test)]
pub struct MemoryCredentials(pub std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl MemoryCredentials {
    pub fn new() -> Self {
        Self(std::cell::RefCell::new(None))
    }

    pub fn with_token(token: &str) -> Self {
        Self(std::cell::RefCell::new(Some(token.to_string())))
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
