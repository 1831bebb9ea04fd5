use web_sys::window;

/// `window.alert` bloqueante; si no hay window solo queda el log
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            if win.alert_with_message(message).is_err() {
                log::warn!("⚠️ [APP] No se pudo mostrar alert: {}", message);
            }
        }
        None => log::warn!("⚠️ [APP] Sin window, alert omitido: {}", message),
    }
}
