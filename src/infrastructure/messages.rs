// src/infrastructure/messages.rs
//! In-memory message catalog.
//!
//! Templates are keyed by locale, then code; positional placeholders
//! (`{0}`, `{1}`, ...) are substituted from the error's argument list.
//! The catalog is built once at startup and never mutated afterwards.

use crate::application::ports::messages::MessageCatalog;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Default, Clone)]
pub struct StaticMessageCatalog {
    templates: HashMap<String, HashMap<String, String>>,
}

impl StaticMessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the built-in English templates.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.insert("en", "USER_NOT_FOUND", "user {0} does not exist");
        catalog.insert("en", "INVALID_USER_ID", "'{0}' is not a valid user id");
        catalog
    }

    /// Parse a catalog from a JSON document of the shape
    /// `{"<locale>": {"<code>": "<template>", ...}, ...}`.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let templates: HashMap<String, HashMap<String, String>> =
            serde_json::from_str(json).context("malformed message catalog document")?;
        Ok(Self { templates })
    }

    /// Load a catalog document from disk, merged over the built-in defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading message catalog {}", path.display()))?;
        let loaded = Self::from_json_str(&raw)?;
        let mut catalog = Self::with_defaults();
        for (locale, codes) in loaded.templates {
            catalog.templates.entry(locale).or_default().extend(codes);
        }
        Ok(catalog)
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        code: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.templates
            .entry(locale.into())
            .or_default()
            .insert(code.into(), template.into());
        self
    }

    fn template(&self, code: &str, locale: &str) -> Option<&str> {
        if let Some(template) = self.templates.get(locale).and_then(|m| m.get(code)) {
            return Some(template);
        }
        // "en-GB" falls back to "en" when no regional bundle exists.
        let language = locale.split('-').next()?;
        if language == locale {
            return None;
        }
        self.templates
            .get(language)
            .and_then(|m| m.get(code))
            .map(String::as_str)
    }
}

fn format_template(template: &str, args: &[String]) -> String {
    let mut message = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{index}}}"), arg);
    }
    message
}

impl MessageCatalog for StaticMessageCatalog {
    fn resolve(&self, code: &str, args: &[String], locale: &str) -> Option<String> {
        self.template(code, locale)
            .map(|template| format_template(template, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticMessageCatalog {
        let mut catalog = StaticMessageCatalog::new();
        catalog.insert("en", "USER_NOT_FOUND", "user {0} does not exist");
        catalog.insert("en", "GREETING", "hello");
        catalog.insert("ja", "USER_NOT_FOUND", "ユーザー {0} は存在しません");
        catalog
    }

    #[test]
    fn resolves_template_with_args() {
        let message = catalog().resolve("USER_NOT_FOUND", &["alice".into()], "en");
        assert_eq!(message.as_deref(), Some("user alice does not exist"));
    }

    #[test]
    fn resolves_per_locale() {
        let message = catalog().resolve("USER_NOT_FOUND", &["alice".into()], "ja");
        assert_eq!(message.as_deref(), Some("ユーザー alice は存在しません"));
    }

    #[test]
    fn regional_locale_falls_back_to_language() {
        let message = catalog().resolve("GREETING", &[], "en-GB");
        assert_eq!(message.as_deref(), Some("hello"));
    }

    #[test]
    fn unknown_code_resolves_to_none() {
        assert_eq!(catalog().resolve("NOPE", &[], "en"), None);
    }

    #[test]
    fn surplus_args_are_ignored() {
        let message = catalog().resolve("GREETING", &["ignored".into()], "en");
        assert_eq!(message.as_deref(), Some("hello"));
    }

    #[test]
    fn missing_args_leave_placeholder_untouched() {
        let message = catalog().resolve("USER_NOT_FOUND", &[], "en");
        assert_eq!(message.as_deref(), Some("user {0} does not exist"));
    }

    #[test]
    fn parses_json_document() {
        let catalog = StaticMessageCatalog::from_json_str(
            r#"{"en": {"LIMIT_EXCEEDED": "limit is {0}"}}"#,
        )
        .unwrap();
        let message = catalog.resolve("LIMIT_EXCEEDED", &["10".into()], "en");
        assert_eq!(message.as_deref(), Some("limit is 10"));
    }

    #[test]
    fn rejects_malformed_json_document() {
        assert!(StaticMessageCatalog::from_json_str("not json").is_err());
    }
}
