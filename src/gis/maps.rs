//! Map viewer hand-off: builds the Google Maps search URL for a resolved
//! coordinate and opens it in the system browser.

use std::process::Command;

use log::{info, warn};

use super::resolver::Coordinates;

/// Default map viewer base URL.
pub const DEFAULT_MAPS_BASE_URL: &str = "https://www.google.com";

/// Builds the map viewer search URL for a coordinate.
///
/// The query target is `<y>,<x>` — latitude-like first. That ordering is the
/// viewer's URL contract, not a choice made here.
pub fn search_url(base_url: &str, coords: Coordinates) -> String {
    format!(
        "{}/maps/search/?api=1&query={},{}",
        base_url.trim_end_matches('/'),
        coords.y,
        coords.x
    )
}

/// Opens a URL in the platform's default browser.
///
/// Launch failure is reported to the caller; the lookup that produced the
/// URL still counts as successful (the caller falls back to showing the URL).
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    info!("Opening map viewer: {}", url);

    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", "", url]).spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = Command::new("xdg-open").arg(url).spawn();

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            warn!("Failed to launch browser: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_puts_y_before_x() {
        let url = search_url(DEFAULT_MAPS_BASE_URL, Coordinates { x: 51.53, y: 25.28 });
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=25.28,51.53"
        );
    }

    #[test]
    fn test_search_url_tolerates_trailing_slash() {
        let url = search_url("https://maps.example.com/", Coordinates { x: 1.0, y: 2.0 });
        assert_eq!(url, "https://maps.example.com/maps/search/?api=1&query=2,1");
    }
}
