// ============================================================================
// TOAST SERVICE - Único canal de notificaciones hacia la UI
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::window;

/// Severidades soportadas por la superficie de notificaciones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Warning => "toast toast-warning",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

/// Sink de notificaciones inyectable. El transporte y los stores no saben
/// cómo se renderiza un toast, solo lo emiten.
pub trait Toaster {
    fn show(&self, level: ToastLevel, message: &str);

    fn success(&self, message: &str) {
        self.show(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.show(ToastLevel::Error, message);
    }

    fn warning(&self, message: &str) {
        self.show(ToastLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.show(ToastLevel::Info, message);
    }
}

const TOAST_CONTAINER_ID: &str = "toast-container";
const TOAST_DURATION_MS: u32 = 4000;

/// Implementación DOM: apila divs en un contenedor fijo y los retira solos
pub struct DomToaster;

impl Toaster for DomToaster {
    fn show(&self, level: ToastLevel, message: &str) {
        let document = match window().and_then(|w| w.document()) {
            Some(d) => d,
            None => return,
        };

        // Contenedor único, creado bajo demanda
        let container = match document.get_element_by_id(TOAST_CONTAINER_ID) {
            Some(c) => c,
            None => {
                let container = match document.create_element("div") {
                    Ok(c) => c,
                    Err(_) => return,
                };
                container.set_id(TOAST_CONTAINER_ID);
                if let Some(body) = document.body() {
                    let _ = body.append_child(&container);
                }
                container
            }
        };

        let toast = match document.create_element("div") {
            Ok(t) => t,
            Err(_) => return,
        };
        toast.set_class_name(level.css_class());
        toast.set_text_content(Some(message));
        let _ = container.append_child(&toast);

        // Auto-dismiss
        let node = toast.clone();
        Timeout::new(TOAST_DURATION_MS, move || {
            node.remove();
        })
        .forget();
    }
}

/// Toaster de test: registra (nivel, mensaje) en orden de emisión
#[cfg(test)]
pub struct RecordingToaster(pub std::cell::RefCell<Vec<(ToastLevel, String)>>);

#[cfg(test)]
impl RecordingToaster {
    pub fn new() -> Self {
        Self(std::cell::RefCell::new(Vec::new()))
    }

    pub fn messages(&self) -> Vec<(ToastLevel, String)> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
impl Toaster for RecordingToaster {
    fn show(&self, level: ToastLevel, message: &str) {
        self.0.borrow_mut().push((level, message.to_string()));
    }
}
