use podval_core::SessionConfig;
use yew::prelude::*;

const CONFIG_QUERY_KEY: &str = "config";

/// Reads `?config={...}` once on mount. Missing or malformed values fall back
/// to the defaults.
#[hook]
pub fn use_query_config() -> SessionConfig {
    let config = use_state(|| {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();

        let Some(value) = web_sys::UrlSearchParams::new_with_str(&search)
            .ok()
            .and_then(|params| params.get(CONFIG_QUERY_KEY))
        else {
            return SessionConfig::default();
        };

        match SessionConfig::from_json(&value) {
            Ok(config) => {
                tracing::info!(?config, "Session config loaded from query string");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed config query parameter");
                SessionConfig::default()
            }
        }
    });
    *config
}
