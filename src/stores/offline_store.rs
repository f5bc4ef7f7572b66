// ============================================================================
// OFFLINE STORE - Estado de conectividad con listeners online/offline
// ============================================================================
// Los closures registrados se RETIENEN (no forget): cleanup() des-registra
// los listeners de window y los suelta de verdad.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event};

use crate::services::toast::Toaster;

pub struct OfflineStore {
    toaster: Rc<dyn Toaster>,
    is_online: Rc<Cell<bool>>,
    online_listener: RefCell<Option<Closure<dyn FnMut(Event)>>>,
    offline_listener: RefCell<Option<Closure<dyn FnMut(Event)>>>,
    monitoring: Cell<bool>,
}

impl OfflineStore {
    /// El flag arranca con navigator.onLine; sin navegador se asume online
    pub fn new(toaster: Rc<dyn Toaster>) -> Self {
        let initial = window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true);

        Self {
            toaster,
            is_online: Rc::new(Cell::new(initial)),
            online_listener: RefCell::new(None),
            offline_listener: RefCell::new(None),
            monitoring: Cell::new(false),
        }
    }

    pub fn is_online(&self) -> bool {
        self.is_online.get()
    }

    pub fn is_offline(&self) -> bool {
        !self.is_online.get()
    }

    // ------------------------------------------------------------------
    // Transiciones: un toast por señal, nada más
    // ------------------------------------------------------------------

    fn handle_online(is_online: &Cell<bool>, toaster: &dyn Toaster) {
        log::info!("🌐 Conexión restaurada");
        is_online.set(true);
        toaster.success("Connection restored!");
    }

    fn handle_offline(is_online: &Cell<bool>, toaster: &dyn Toaster) {
        log::warn!("📴 Sin conexión");
        is_online.set(false);
        toaster.warning("You are now offline. Some features may be limited.");
    }

    /// Registra los listeners de window. Llamadas repetidas se ignoran
    /// para no acumular registros duplicados.
    pub fn initialize(&self) {
        if self.monitoring.get() {
            log::warn!("⚠️ OfflineStore: initialize ya fue llamado, ignorando");
            return;
        }

        let window = match window() {
            Some(w) => w,
            None => return,
        };

        let online_closure = Closure::wrap(Box::new({
            let is_online = self.is_online.clone();
            let toaster = self.toaster.clone();
            move |_event: Event| {
                Self::handle_online(&is_online, toaster.as_ref());
            }
        }) as Box<dyn FnMut(Event)>);

        let offline_closure = Closure::wrap(Box::new({
            let is_online = self.is_online.clone();
            let toaster = self.toaster.clone();
            move |_event: Event| {
                Self::handle_offline(&is_online, toaster.as_ref());
            }
        }) as Box<dyn FnMut(Event)>);

        let _ = window.add_event_listener_with_callback(
            "online",
            online_closure.as_ref().unchecked_ref(),
        );
        let _ = window.add_event_listener_with_callback(
            "offline",
            offline_closure.as_ref().unchecked_ref(),
        );

        *self.online_listener.borrow_mut() = Some(online_closure);
        *self.offline_listener.borrow_mut() = Some(offline_closure);
        self.monitoring.set(true);

        log::info!("✅ OfflineStore: listeners de red registrados");
    }

    /// Des-registra los listeners y suelta los closures. Tras esto el
    /// store deja de reaccionar a cambios de red hasta otro initialize().
    pub fn cleanup(&self) {
        if !self.monitoring.get() {
            return;
        }

        if let Some(window) = window() {
            if let Some(closure) = self.online_listener.borrow_mut().take() {
                let _ = window.remove_event_listener_with_callback(
                    "online",
                    closure.as_ref().unchecked_ref(),
                );
            }
            if let Some(closure) = self.offline_listener.borrow_mut().take() {
                let _ = window.remove_event_listener_with_callback(
                    "offline",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }

        self.monitoring.set(false);
        log::info!("🔌 OfflineStore: listeners de red retirados");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::toast::{RecordingToaster, ToastLevel};

    #[test]
    fn online_signal_sets_flag_and_emits_one_success_toast() {
        let is_online = Cell::new(false);
        let toaster = RecordingToaster::new();

        OfflineStore::handle_online(&is_online, &toaster);

        assert!(is_online.get());
        let messages = toaster.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, ToastLevel::Success);
        assert_eq!(messages[0].1, "Connection restored!");
    }

    #[test]
    fn offline_signal_clears_flag_and_emits_one_warning_toast() {
        let is_online = Cell::new(true);
        let toaster = RecordingToaster::new();

        OfflineStore::handle_offline(&is_online, &toaster);

        assert!(!is_online.get());
        let messages = toaster.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, ToastLevel::Warning);
        assert_eq!(messages[0].1, "You are now offline. Some features may be limited.");
    }
}
