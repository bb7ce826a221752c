use crate::router::AppRoute;

/// Full-page navigation; the app re-arms its session from storage on load.
pub fn redirect_to(route: AppRoute) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if location.pathname().ok().as_deref() == Some(route.path()) {
        return;
    }
    if location.set_href(route.path()).is_err() {
        log::error!("Failed to navigate to {}", route.path());
    }
}

/// Blocking browser notice.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
