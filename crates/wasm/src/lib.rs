mod console;
mod host;

use std::sync::Mutex;

use host::{WebDocument, WebStorage};
use vscode_boot_core::BundleCache;
use wasm_bindgen::prelude::*;

const LOG_TARGET: &str = "vscode_boot";

static BUNDLES: Mutex<BundleCache> = Mutex::new(BundleCache::new());

#[wasm_bindgen(start)]
pub fn start() {
    console::init(log::LevelFilter::Info);
}

/// Parse the NLS configuration embedded in the page. Returns it as JSON.
#[wasm_bindgen(js_name = getNlsConfiguration)]
pub fn get_nls_configuration() -> Result<String, JsError> {
    let document = WebDocument::current();
    let config = vscode_boot_core::get_nls_configuration(document.as_ref())
        .map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&config).map_err(|e| JsError::new(&e.to_string()))
}

/// Paint the body with the persisted theme's background. Returns the applied
/// color, or `undefined` when the theme has none.
#[wasm_bindgen(js_name = setBodyBackgroundToThemeBackgroundColor)]
pub fn set_body_background_to_theme_background_color() -> Result<Option<String>, JsError> {
    let mut document = WebDocument::current();
    let storage = WebStorage::local();
    vscode_boot_core::resolve_and_apply_background(document.as_mut(), storage.as_ref())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// URL to fetch `bundle`'s translations from, or `undefined` without a
/// language pack.
#[wasm_bindgen(js_name = getNlsBundleUrl)]
pub fn get_nls_bundle_url(base: &str, bundle: &str) -> Result<Option<String>, JsError> {
    let document = WebDocument::current();
    let url = vscode_boot_core::get_nls_bundle_url(document.as_ref(), base, bundle)
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(url.map(String::from))
}

/// Messages of a bundle fetched earlier on this page, as JSON.
#[wasm_bindgen(js_name = getCachedNlsBundle)]
pub fn get_cached_nls_bundle(bundle: &str) -> Result<Option<String>, JsError> {
    let bundles = BUNDLES
        .lock()
        .map_err(|_| JsError::new("NLS bundle cache poisoned"))?;
    bundles
        .get(bundle)
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Remember the messages (JSON text) fetched for `bundle`. Returns `false`
/// when the bundle was already cached.
#[wasm_bindgen(js_name = cacheNlsBundle)]
pub fn cache_nls_bundle(bundle: &str, messages: &str) -> Result<bool, JsError> {
    let messages: serde_json::Value =
        serde_json::from_str(messages).map_err(|e| JsError::new(&e.to_string()))?;
    let mut bundles = BUNDLES
        .lock()
        .map_err(|_| JsError::new("NLS bundle cache poisoned"))?;
    Ok(bundles.insert(bundle, messages))
}
