use std::fmt;

use thiserror::Error;

use crate::{COLOR_THEME_STORAGE_KEY, ERROR_PREFIX, NLS_CONFIG_ELEMENT_ID};

#[derive(Debug, Error)]
pub enum BootError {
    #[error("{prefix} {stage}. {reason}.", prefix = ERROR_PREFIX)]
    InvalidInput { stage: Stage, reason: InvalidInput },
    /// A stored or embedded value is present but is not valid JSON.
    /// Kept apart from `InvalidInput`: the host sees the parser's own message.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),
}

impl BootError {
    pub(crate) fn invalid(stage: Stage, reason: InvalidInput) -> Self {
        BootError::InvalidInput { stage, reason }
    }

    /// The precondition that failed, if this is an input error.
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            BootError::InvalidInput { reason, .. } => Some(reason),
            BootError::Json(_) | BootError::Url(_) => None,
        }
    }
}

/// Which extraction was running when an input check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NlsConfiguration,
    BodyBackground,
}

impl Stage {
    /// How this stage's messages name the document; only the body-background
    /// messages capitalize it.
    fn document_name(self) -> &'static str {
        match self {
            Stage::NlsConfiguration => "document",
            Stage::BodyBackground => "Document",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::NlsConfiguration => "Could not parse NLS configuration",
            Stage::BodyBackground => "Could not set body background to theme background color",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("{name} is undefined")]
    DocumentUndefined { name: &'static str },
    #[error("localStorage is undefined")]
    StorageUndefined,
    #[error("Could not find nlsConfigElement with id: {id}")]
    MissingMarkerElement { id: &'static str },
    #[error("Found nlsConfigElement but missing data-settings attribute")]
    MissingSettingsAttribute,
    #[error("Could not find {key} in localStorage", key = COLOR_THEME_STORAGE_KEY)]
    MissingThemeData,
}

impl InvalidInput {
    pub(crate) fn document_undefined(stage: Stage) -> Self {
        InvalidInput::DocumentUndefined {
            name: stage.document_name(),
        }
    }

    pub(crate) fn missing_marker_element() -> Self {
        InvalidInput::MissingMarkerElement {
            id: NLS_CONFIG_ELEMENT_ID,
        }
    }
}
