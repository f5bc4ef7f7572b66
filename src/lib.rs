// ============================================================================
// BUSINESS MANAGER PWA - CAPA DE DATOS DEL CLIENTE (RUST PURO)
// ============================================================================
// Arquitectura en tres capas:
// - Services: transporte HTTP con interceptores + mapas de endpoints
// - Stores: caché local por dominio con Rc<RefCell> y vistas derivadas
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Instancia global de la aplicación, viva durante toda la sesión
thread_local! {
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if config::CONFIG.enable_logging {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Business Manager PWA - Rust Puro");

    let app = Rc::new(App::new());

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app.clone());
    });

    wasm_bindgen_futures::spawn_local(async move {
        app.start().await;
    });

    Ok(())
}
