use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Resolved category bucket for a widget type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub color_hex: String,
}

impl Category {
    pub fn new(category_id: impl Into<String>, color_hex: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            color_hex: color_hex.into(),
        }
    }

    /// RGB components of `color_hex`, if it is a well-formed `#rrggbb` value.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.color_hex)
    }
}

/// Single keyword rule; `keyword` is matched against the lowercased type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub category_id: String,
    pub color_hex: String,
}

impl CategoryRule {
    pub fn new(
        keyword: impl Into<String>,
        category_id: impl Into<String>,
        color_hex: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            category_id: category_id.into(),
            color_hex: color_hex.into(),
        }
    }
}

/// Static keyword → category mapping with a default bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub default: Category,
    #[serde(default)]
    pub rules: Vec<CategoryRule>,
}

impl CategoryTable {
    /// Build a table, validating colors and lowercasing keywords.
    pub fn new(default: Category, rules: Vec<CategoryRule>) -> Result<Self> {
        let table = Self { default, rules };
        table.normalized()
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let table: CategoryTable = serde_json::from_str(raw)?;
        table.normalized()
    }

    /// Palette categories shipped with the builder.
    pub fn builtin() -> Self {
        const RULES: &[(&str, &str, &str)] = &[
            ("button", "interactive", "#3b82f6"),
            ("icon", "interactive", "#3b82f6"),
            ("badge", "interactive", "#3b82f6"),
            ("tag", "interactive", "#3b82f6"),
            ("rating", "engagement", "#ef4444"),
            ("likes", "engagement", "#ef4444"),
            ("bookmark", "engagement", "#ef4444"),
            ("form", "input", "#10b981"),
            ("search", "input", "#10b981"),
            ("filter", "input", "#10b981"),
            ("image", "media", "#ec4899"),
            ("gallery", "media", "#ec4899"),
            ("video", "media", "#ec4899"),
            ("calendar", "events", "#f59e0b"),
            ("event", "events", "#f59e0b"),
            ("countdown", "events", "#f59e0b"),
            ("user", "community", "#8b5cf6"),
            ("comment", "community", "#8b5cf6"),
            ("activit", "community", "#8b5cf6"),
            ("card", "content", "#6366f1"),
            ("accordion", "content", "#6366f1"),
            ("post", "content", "#6366f1"),
            ("chart", "analytics", "#64748b"),
            ("stat", "analytics", "#64748b"),
        ];

        Self {
            default: Category::new("general", "#6b7280"),
            rules: RULES
                .iter()
                .map(|(keyword, id, color)| CategoryRule::new(*keyword, *id, *color))
                .collect(),
        }
    }

    /// Resolve the category for a type name. Unmatched types get `default`.
    pub fn resolve(&self, type_name: &str) -> Category {
        let lowered = type_name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.keyword.as_str()))
            .map(|rule| Category::new(rule.category_id.clone(), rule.color_hex.clone()))
            .unwrap_or_else(|| self.default.clone())
    }

    fn normalized(mut self) -> Result<Self> {
        validate_color(&self.default.color_hex)?;
        for rule in self.rules.iter_mut() {
            if rule.keyword.trim().is_empty() {
                return Err(BoardError::EmptyKeyword);
            }
            validate_color(&rule.color_hex)?;
            rule.keyword = rule.keyword.trim().to_lowercase();
        }
        Ok(self)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_color(raw: &str) -> Result<()> {
    parse_hex_color(raw)
        .map(|_| ())
        .ok_or_else(|| BoardError::InvalidColor(raw.to_string()))
}

pub(crate) fn parse_hex_color(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_by_substring() {
        let table = CategoryTable::builtin();
        let category = table.resolve("Newsletter Signup Form");
        assert_eq!(category.category_id, "input");
        assert_eq!(category.color_hex, "#10b981");
    }

    #[test]
    fn unmatched_type_uses_default_bucket() {
        let table = CategoryTable::builtin();
        assert_eq!(table.resolve("Announcement Banner"), table.default);
    }

    #[test]
    fn builtin_colors_are_valid() {
        let table = CategoryTable::builtin();
        assert!(table.default.rgb().is_some());
        for rule in &table.rules {
            assert!(parse_hex_color(&rule.color_hex).is_some(), "{}", rule.keyword);
        }
    }

    #[test]
    fn from_json_lowercases_keywords() {
        let table = CategoryTable::from_json(
            r##"{
                "default": {"category_id": "misc", "color_hex": "#000000"},
                "rules": [{"keyword": "Poll", "category_id": "engagement", "color_hex": "#FF0000"}]
            }"##,
        )
        .unwrap();
        assert_eq!(table.rules[0].keyword, "poll");
        assert_eq!(table.resolve("Weekly POLL").category_id, "engagement");
        assert_eq!(table.resolve("Weekly POLL").rgb(), Some((255, 0, 0)));
    }

    #[test]
    fn from_json_rejects_bad_colors() {
        let err = CategoryTable::from_json(
            r#"{"default": {"category_id": "misc", "color_hex": "blue"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::InvalidColor(color) if color == "blue"));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = CategoryTable::from_json("{not json").unwrap_err();
        assert!(matches!(err, BoardError::CategoryTable(_)));
    }

    #[test]
    fn empty_keywords_are_rejected() {
        let err = CategoryTable::new(
            Category::new("misc", "#000000"),
            vec![CategoryRule::new("  ", "x", "#111111")],
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::EmptyKeyword));
    }
}
