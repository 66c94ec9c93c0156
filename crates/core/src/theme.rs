use vscode_boot_protocol::ColorThemeData;

use crate::error::{BootError, InvalidInput, Stage};
use crate::host::{Document, Storage};
use crate::{COLOR_THEME_STORAGE_KEY, LOG_TARGET};

/// Paint `<body>` with the persisted theme's background before the workbench loads.
///
/// Reads the theme record stored under `colorThemeData`, takes the background
/// of the first token rule that declares one (in stored order) and writes it
/// to the body's `background-color`. Returns the applied color, or `None`
/// when the theme declares no token background; in that case the document
/// is left untouched.
pub fn resolve_and_apply_background<D, S>(
    document: Option<&mut D>,
    storage: Option<&S>,
) -> Result<Option<String>, BootError>
where
    D: Document + ?Sized,
    S: Storage + ?Sized,
{
    let invalid = |reason| BootError::invalid(Stage::BodyBackground, reason);

    let document = document
        .ok_or_else(|| invalid(InvalidInput::document_undefined(Stage::BodyBackground)))?;
    let storage = storage.ok_or_else(|| invalid(InvalidInput::StorageUndefined))?;
    let stored = storage
        .get_item(COLOR_THEME_STORAGE_KEY)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid(InvalidInput::MissingThemeData))?;

    let theme: ColorThemeData = serde_json::from_str(&stored)?;
    let Some(color) = theme.first_token_background() else {
        log::debug!(
            target: LOG_TARGET,
            "theme {} declares no token background",
            theme.id().unwrap_or("<unnamed>")
        );
        return Ok(None);
    };

    document.set_body_background_color(color);
    log::debug!(target: LOG_TARGET, "body background set to {color}");
    Ok(Some(color.to_string()))
}
