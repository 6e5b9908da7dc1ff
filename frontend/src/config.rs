use common::config::DashboardConfig;
use log::{debug, warn};

/// Id of the `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Reads the page's config block, falling back to defaults.
pub fn load() -> DashboardConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    parse(raw.as_deref())
}

pub fn parse(raw: Option<&str>) -> DashboardConfig {
    match raw.map(str::trim) {
        None | Some("") => {
            debug!("no dashboard config block, using defaults");
            DashboardConfig::default()
        }
        Some(text) => DashboardConfig::from_json(text).unwrap_or_else(|err| {
            warn!("{err}; using default dashboard config");
            DashboardConfig::default()
        }),
    }
}
