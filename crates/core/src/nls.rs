use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde_json::Value;
use url::Url;
use vscode_boot_protocol::NlsConfiguration;

use crate::error::{BootError, InvalidInput, Stage};
use crate::host::{Document, Element};
use crate::{LOG_TARGET, NLS_CONFIG_ELEMENT_ID, NLS_SETTINGS_ATTRIBUTE};

/// Read the NLS configuration the server embedded in the page.
///
/// Looks up the marker element, reads its `data-settings` attribute and parses
/// it as JSON. The shape of the result is owned by the server, so it is
/// returned as a plain [`Value`]; see [`get_typed_nls_configuration`] for the
/// typed view. Malformed JSON surfaces as [`BootError::Json`].
pub fn get_nls_configuration<D>(document: Option<&D>) -> Result<Value, BootError>
where
    D: Document + ?Sized,
{
    let invalid = |reason| BootError::invalid(Stage::NlsConfiguration, reason);

    let document = document
        .ok_or_else(|| invalid(InvalidInput::document_undefined(Stage::NlsConfiguration)))?;
    let element = document
        .get_element_by_id(NLS_CONFIG_ELEMENT_ID)
        .ok_or_else(|| invalid(InvalidInput::missing_marker_element()))?;
    let settings = element
        .get_attribute(NLS_SETTINGS_ATTRIBUTE)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid(InvalidInput::MissingSettingsAttribute))?;

    let value = serde_json::from_str(&settings)?;
    log::debug!(target: LOG_TARGET, "parsed NLS configuration from #{NLS_CONFIG_ELEMENT_ID}");
    Ok(value)
}

/// [`get_nls_configuration`] followed by the typed [`NlsConfiguration`] view.
pub fn get_typed_nls_configuration<D>(document: Option<&D>) -> Result<NlsConfiguration, BootError>
where
    D: Document + ?Sized,
{
    let value = get_nls_configuration(document)?;
    Ok(NlsConfiguration::from_value(value)?)
}

/// Resource URL of `bundle`'s translations under the page's language pack.
///
/// `base` is the absolute URL the editor is served from. `Ok(None)` when the
/// page runs without a language pack and there is nothing to fetch.
pub fn get_nls_bundle_url<D>(
    document: Option<&D>,
    base: &str,
    bundle: &str,
) -> Result<Option<Url>, BootError>
where
    D: Document + ?Sized,
{
    let config = get_typed_nls_configuration(document)?;
    let base = Url::parse(base)?;
    Ok(config.bundle_resource_url(&base, bundle)?)
}

/// Translated-string bundles already loaded during this page's lifetime.
///
/// The workbench asks for the same bundle from many modules; the host fetches
/// each id once and serves later requests from here.
#[derive(Debug, Clone, Default)]
pub struct BundleCache {
    bundles: BTreeMap<String, Value>,
}

impl BundleCache {
    pub const fn new() -> Self {
        Self {
            bundles: BTreeMap::new(),
        }
    }

    pub fn get(&self, bundle: &str) -> Option<&Value> {
        self.bundles.get(bundle)
    }

    /// Store the messages of a fetched bundle. A bundle already cached keeps
    /// its first messages; returns whether `messages` was stored.
    pub fn insert(&mut self, bundle: impl Into<String>, messages: Value) -> bool {
        match self.bundles.entry(bundle.into()) {
            Entry::Occupied(entry) => {
                log::debug!(target: LOG_TARGET, "NLS bundle {} already cached", entry.key());
                false
            }
            Entry::Vacant(entry) => {
                log::debug!(target: LOG_TARGET, "caching NLS bundle {}", entry.key());
                entry.insert(messages);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryDocument, MemoryElement};
    use serde_json::json;

    fn document_with_settings(settings: &str) -> MemoryDocument {
        MemoryDocument::new().with_element(
            NLS_CONFIG_ELEMENT_ID,
            MemoryElement::new().with_attribute(NLS_SETTINGS_ATTRIBUTE, settings),
        )
    }

    #[test]
    fn missing_document() {
        let err = get_nls_configuration::<MemoryDocument>(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[vscode] Could not parse NLS configuration. document is undefined."
        );
    }

    #[test]
    fn missing_marker_element() {
        let doc = MemoryDocument::new();
        let err = get_nls_configuration(Some(&doc)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[vscode] Could not parse NLS configuration. Could not find nlsConfigElement with id: vscode-remote-nls-configuration."
        );
    }

    #[test]
    fn missing_settings_attribute() {
        let doc = MemoryDocument::new().with_element(NLS_CONFIG_ELEMENT_ID, MemoryElement::new());
        let err = get_nls_configuration(Some(&doc)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[vscode] Could not parse NLS configuration. Found nlsConfigElement but missing data-settings attribute."
        );
    }

    #[test]
    fn empty_settings_attribute_counts_as_missing() {
        let doc = document_with_settings("");
        let err = get_nls_configuration(Some(&doc)).unwrap_err();
        assert_eq!(
            err.invalid_input(),
            Some(&InvalidInput::MissingSettingsAttribute)
        );
    }

    #[test]
    fn parses_settings() {
        let doc = document_with_settings(r#"{"first":"Jane","last":"Doe"}"#);
        let config = get_nls_configuration(Some(&doc)).unwrap();
        assert_eq!(config, json!({"first": "Jane", "last": "Doe"}));
    }

    #[test]
    fn reading_does_not_touch_the_document() {
        let doc = document_with_settings(r#"{"locale":"en"}"#);
        let before = doc.clone();
        get_nls_configuration(Some(&doc)).unwrap();
        get_nls_configuration(Some(&doc)).unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn malformed_settings_propagate_parse_error() {
        let doc = document_with_settings("{locale:");
        let err = get_nls_configuration(Some(&doc)).unwrap_err();
        assert!(matches!(err, BootError::Json(_)));
        assert!(!err.to_string().starts_with("[vscode]"));
    }

    #[test]
    fn typed_view() {
        let doc = document_with_settings(
            r#"{"locale":"fr","availableLanguages":{"*":"fr"},"_resolvedLanguagePackCoreLocation":"/lp/core"}"#,
        );
        let config = get_typed_nls_configuration(Some(&doc)).unwrap();
        assert_eq!(config.locale.as_deref(), Some("fr"));
        assert_eq!(
            config.bundle_path("vs/nls").as_deref(),
            Some("/lp/core/vs!nls.nls.json")
        );
    }

    #[test]
    fn typed_view_rejects_wrong_shape() {
        let doc = document_with_settings(r#"{"locale":42}"#);
        let err = get_typed_nls_configuration(Some(&doc)).unwrap_err();
        assert!(matches!(err, BootError::Json(_)));
    }

    #[test]
    fn bundle_url_from_page_settings() {
        let doc = document_with_settings(
            r#"{"locale":"fr","_resolvedLanguagePackCoreLocation":"/lp/core"}"#,
        );
        let url = get_nls_bundle_url(
            Some(&doc),
            "http://localhost:8080/",
            "vs/base/common/errors",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/vscode/resource/?path=%2Flp%2Fcore%2Fvs%21base%21common%21errors.nls.json"
        );
    }

    #[test]
    fn bundle_url_without_language_pack() {
        let doc = document_with_settings(r#"{"locale":"en"}"#);
        let url = get_nls_bundle_url(Some(&doc), "http://localhost:8080/", "vs/nls").unwrap();
        assert_eq!(url, None);
    }

    #[test]
    fn bundle_url_errors() {
        let err = get_nls_bundle_url::<MemoryDocument>(None, "http://localhost/", "vs/nls")
            .unwrap_err();
        assert!(err.invalid_input().is_some());

        let doc = document_with_settings(r#"{"_resolvedLanguagePackCoreLocation":"/lp/core"}"#);
        let err = get_nls_bundle_url(Some(&doc), "not a url", "vs/nls").unwrap_err();
        assert!(matches!(err, BootError::Url(_)));
    }

    #[test]
    fn bundle_cache_keeps_first_messages() {
        let mut cache = BundleCache::new();
        assert!(cache.is_empty());

        assert!(cache.insert("vs/nls", json!(["a"])));
        assert!(!cache.insert("vs/nls", json!(["b"])));

        assert_eq!(cache.get("vs/nls"), Some(&json!(["a"])));
        assert_eq!(cache.get("vs/base/common/errors"), None);
        assert_eq!(cache.len(), 1);
    }
}
