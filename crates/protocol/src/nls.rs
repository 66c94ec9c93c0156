use std::collections::BTreeMap;

use serde::Deserialize;
use url::Url;

/// Typed view of the NLS configuration the server embeds in the page.
///
/// Every field is optional: the server only fills in the language pack
/// fields when a non-default locale is active. Keys not modeled here are
/// preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NlsConfiguration {
    pub locale: Option<String>,
    pub os_locale: Option<String>,
    pub available_languages: BTreeMap<String, String>,
    #[serde(rename = "_languagePackId")]
    pub language_pack_id: Option<String>,
    #[serde(rename = "_translationsConfigFile")]
    pub translations_config_file: Option<String>,
    #[serde(rename = "_cacheRoot")]
    pub cache_root: Option<String>,
    #[serde(rename = "_resolvedLanguagePackCoreLocation")]
    pub resolved_language_pack_core_location: Option<String>,
    #[serde(rename = "_corruptedFile")]
    pub corrupted_file: Option<String>,
    #[serde(rename = "_languagePackSupport")]
    pub language_pack_support: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NlsConfiguration {
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Location of the translated strings for `bundle`, e.g.
    /// `vs/workbench/foo` -> `<core location>/vs!workbench!foo.nls.json`.
    ///
    /// `None` when no language pack is active.
    pub fn bundle_path(&self, bundle: &str) -> Option<String> {
        let location = self
            .resolved_language_pack_core_location
            .as_deref()
            .filter(|l| !l.is_empty())?;
        Some(format!(
            "{location}/{}.nls.json",
            bundle.replace('/', "!")
        ))
    }

    /// Resource URL the bundle is served from: `<base>/vscode/resource/?path=<bundle path>`.
    pub fn bundle_resource_url(
        &self,
        base: &Url,
        bundle: &str,
    ) -> Result<Option<Url>, url::ParseError> {
        let Some(path) = self.bundle_path(bundle) else {
            return Ok(None);
        };

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["vscode", "resource", ""]);
        url.set_query(None);
        url.query_pairs_mut().append_pair("path", &path);
        Ok(Some(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_language_pack() -> NlsConfiguration {
        NlsConfiguration::from_value(json!({
            "locale": "de",
            "osLocale": "de-de",
            "availableLanguages": {"*": "de"},
            "_languagePackId": "abc.de",
            "_resolvedLanguagePackCoreLocation": "/home/coder/.cache/clp/abc.de/core",
            "_languagePackSupport": true
        }))
        .unwrap()
    }

    #[test]
    fn parses_server_fields() {
        let config = with_language_pack();
        assert_eq!(config.locale.as_deref(), Some("de"));
        assert_eq!(config.os_locale.as_deref(), Some("de-de"));
        assert_eq!(config.available_languages.get("*").map(String::as_str), Some("de"));
        assert_eq!(config.language_pack_id.as_deref(), Some("abc.de"));
        assert_eq!(config.language_pack_support, Some(true));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let config = NlsConfiguration::from_value(json!({"first": "Jane", "last": "Doe"})).unwrap();
        assert_eq!(config.locale, None);
        assert_eq!(config.extra.get("first"), Some(&json!("Jane")));
        assert_eq!(config.extra.get("last"), Some(&json!("Doe")));
    }

    #[test]
    fn bundle_path_replaces_separators() {
        let config = with_language_pack();
        assert_eq!(
            config.bundle_path("vs/base/common/errors").as_deref(),
            Some("/home/coder/.cache/clp/abc.de/core/vs!base!common!errors.nls.json")
        );
    }

    #[test]
    fn no_language_pack_no_bundle() {
        let config = NlsConfiguration::from_value(json!({"locale": "en"})).unwrap();
        let base = Url::parse("http://localhost:8080/").unwrap();
        assert_eq!(config.bundle_path("vs/nls"), None);
        assert_eq!(config.bundle_resource_url(&base, "vs/nls").unwrap(), None);
    }

    #[test]
    fn bundle_resource_url_encodes_path() {
        let config = NlsConfiguration {
            resolved_language_pack_core_location: Some("/lp/core".to_string()),
            ..Default::default()
        };

        let base = Url::parse("http://localhost:8080/").unwrap();
        let url = config
            .bundle_resource_url(&base, "vs/base/common/errors")
            .unwrap()
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/vscode/resource/?path=%2Flp%2Fcore%2Fvs%21base%21common%21errors.nls.json"
        );

        let nested = Url::parse("https://example.com/ide?folder=x").unwrap();
        let url = config.bundle_resource_url(&nested, "vs/nls").unwrap().unwrap();
        assert_eq!(url.path(), "/ide/vscode/resource/");
        assert_eq!(url.query(), Some("path=%2Flp%2Fcore%2Fvs%21nls.nls.json"));
    }
}
