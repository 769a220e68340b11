use serde_json::Value;

/// Name used when a drop carries nothing usable.
pub const DEFAULT_WIDGET_NAME: &str = "New Widget";

/// Decoded palette transfer string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalettePayload {
    /// Used as both the widget type and its display name.
    pub name: String,
    /// Present when the dragged item already exists on the board.
    pub id: Option<String>,
    /// Raw transfer string as received.
    pub raw: String,
}

impl PalettePayload {
    /// Decode a transfer string. Never fails.
    ///
    /// A JSON object contributes its `name` and `id` string fields, a JSON
    /// string literal its contents, and non-JSON text is taken verbatim.
    /// Names are never trimmed; whitespace only decides blankness. Anything
    /// that yields no non-blank name gets `fallback_name`.
    pub fn parse(raw: &str, fallback_name: &str) -> Self {
        let (name, id) = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => (
                non_blank(map.get("name").and_then(Value::as_str)),
                non_blank(map.get("id").and_then(Value::as_str)),
            ),
            Ok(Value::String(text)) => (non_blank(Some(text.as_str())), None),
            Ok(_) => (None, None),
            Err(_) => (non_blank(Some(raw)), None),
        };

        Self {
            name: name.unwrap_or_else(|| fallback_name.to_string()),
            id,
            raw: raw.to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
