//! Validation and extraction of the configuration a browser-hosted editor
//! reads before its workbench loads: the NLS configuration embedded in the
//! page and the body background taken from the persisted color theme.

pub mod error;
pub mod host;
pub mod nls;
pub mod theme;

pub use error::{BootError, InvalidInput, Stage};
pub use host::{Document, Element, Storage};
pub use nls::{
    BundleCache, get_nls_bundle_url, get_nls_configuration, get_typed_nls_configuration,
};
pub use theme::resolve_and_apply_background;

/// Tag every error message starts with.
pub const ERROR_PREFIX: &str = "[vscode]";
/// Id of the element the server injects the NLS configuration into.
pub const NLS_CONFIG_ELEMENT_ID: &str = "vscode-remote-nls-configuration";
/// Attribute on the marker element that holds the JSON settings.
pub const NLS_SETTINGS_ATTRIBUTE: &str = "data-settings";
/// Storage key the workbench persists the active color theme under.
pub const COLOR_THEME_STORAGE_KEY: &str = "colorThemeData";

pub(crate) const LOG_TARGET: &str = "vscode_boot";
