use crate::model::types::Error;
use gloo::timers::callback::Timeout;
use leptos::logging::error;
use std::time::Duration;

fn window() -> Result<web_sys::Window, Error> {
    web_sys::window().ok_or_else(|| Error::Browser("window not available".to_string()))
}

pub fn page_origin() -> Result<String, Error> {
    window()?
        .location()
        .origin()
        .map_err(|e| Error::Browser(format!("{:?}", e)))
}

pub fn reload_page() {
    let reloaded = window().and_then(|window| {
        window
            .location()
            .reload()
            .map_err(|e| Error::Browser(format!("{:?}", e)))
    });
    if let Err(e) = reloaded {
        error!("error reloading page: {}", e);
    }
}

/// Runs `f` once after `delay`. The timer is never cancelled.
pub fn run_after(delay: Duration, f: impl FnOnce() + 'static) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, f).forget();
}
