//! Server-side exports opened outside the dashboard

/// Opens `url` in a new browsing context (tab or window).
///
/// Download failures surface only in that new context; the error returned
/// here covers the browser refusing to open it (e.g. a popup blocker).
pub fn open_in_new_context(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(format!("Browser blocked opening {}", url)),
        Err(e) => Err(format!("Failed to open {}: {:?}", url, e)),
    }
}
