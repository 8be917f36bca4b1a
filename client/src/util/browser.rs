//! Thin browser glue used by the interactive widgets.
//!
//! Every helper is a no-op (or returns a neutral value) outside the
//! `hydrate` build so components stay renderable on the server.

/// Current time in milliseconds since the epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Vertical scroll offset of the window in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Suspend or restore page scrolling via `body { overflow }`.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let value = if locked { "hidden" } else { "unset" };
        if body.style().set_property("overflow", value).is_err() {
            log::warn!("failed to set body overflow to {value}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Open `url` in a new tab. Returns whether the browser accepted the request;
/// a blocked popup yields `false`.
pub fn open_in_new_tab(url: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        matches!(window.open_with_url_and_target(url, "_blank"), Ok(Some(_)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        false
    }
}
