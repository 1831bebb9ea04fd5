// ============================================================================
// JOBWISE - FRONTEND YEW (RUST PURO)
// ============================================================================
// - Components: vistas Yew
// - Hooks: estado de cada vista + contexto compartido
// - ViewModels: pipeline CV -> skills -> empleos
// - Services: SOLO comunicación API + sessionStorage
// - Stores: estado plano, sin dependencias de Yew
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Punto de entrada del binario (Trunk)
pub fn start() {
    // Panic hook para ver los panics en la consola
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 [APP] JobWise iniciando ({}) - backend: {}", CONFIG.environment, CONFIG.api_base_url);

    yew::Renderer::<App>::new().render();
}
