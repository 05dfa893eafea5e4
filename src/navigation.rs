/// Page redirects

use url::Url;

/// Resolve a site path (e.g. `/cart/`) against the current page URL.
pub fn resolve(current: &str, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(current)?.join(path)
}

/// Send the browser to `path`. Falls back to assigning the raw path when the
/// current location cannot be parsed.
pub fn navigate(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();

    let target = location
        .href()
        .ok()
        .and_then(|current| resolve(&current, path).ok())
        .map(String::from)
        .unwrap_or_else(|| path.to_string());

    log::debug!("Navigating to {}", target);
    if let Err(e) = location.set_href(&target) {
        log::warn!("Navigation to {} failed: {:?}", target, e);
    }
}
