use serde::Deserialize;
use serde_json::Value;

/// Color theme record the workbench persists under `colorThemeData`.
///
/// The workbench owns this record and its shape drifts between releases, so
/// it is kept as raw JSON and only the token rule list is walked. Fields of
/// an unexpected type are ignored instead of rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ColorThemeData(Value);

impl ColorThemeData {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// `themeTokenColors` in stored order; empty when absent or not a list.
    pub fn token_colors(&self) -> &[Value] {
        self.0
            .get("themeTokenColors")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Background of the first rule whose `settings.background` is a
    /// non-empty string.
    ///
    /// Rules are scanned in stored order and the first hit wins; later rules
    /// never override it.
    pub fn first_token_background(&self) -> Option<&str> {
        self.token_colors().iter().find_map(rule_background)
    }
}

fn rule_background(rule: &Value) -> Option<&str> {
    rule.get("settings")?
        .get("background")?
        .as_str()
        .filter(|c| !c.is_empty())
}
