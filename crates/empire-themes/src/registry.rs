//! Theme registry for built-in and custom themes
//!
//! Built-in themes are fixed at construction and never change. Custom themes
//! are registered at runtime and may reuse a built-in id, but lookups always
//! resolve built-ins first so a built-in can never be replaced.

use std::{collections::BTreeMap, sync::Arc};

use parking_lot::RwLock;

use crate::{builtin, types::Theme};

/// Theme registry for storing and resolving themes
#[derive(Clone)]
pub struct ThemeRegistry {
    /// Built-in themes in catalogue order
    builtin_themes: Arc<Vec<Theme>>,
    /// Custom themes keyed by id
    custom_themes: Arc<RwLock<BTreeMap<String, Theme>>>,
}

impl ThemeRegistry {
    /// Create a registry holding the built-in catalogue and no custom themes
    pub fn new() -> Self {
        Self {
            builtin_themes: Arc::new(builtin::builtin_themes()),
            custom_themes: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Resolve a theme id (built-in first, then custom)
    pub fn get(&self, id: &str) -> Option<Theme> {
        self.get_builtin(id)
            .or_else(|| self.custom_themes.read().get(id).cloned())
    }

    pub fn get_builtin(&self, id: &str) -> Option<Theme> {
        self.builtin_themes.iter().find(|t| t.id == id).cloned()
    }

    /// The first built-in theme, used when nothing else is selected
    pub fn default_theme(&self) -> Theme {
        self.builtin_themes
            .first()
            .cloned()
            .unwrap_or_else(builtin::saintvision)
    }

    /// Register a custom theme, replacing any custom theme with the same id
    pub fn register(&self, theme: Theme) {
        let id = theme.id.clone();
        let mut custom = self.custom_themes.write();
        if custom.insert(id.clone(), theme).is_some() {
            tracing::debug!("Replaced existing custom theme '{}'", id);
        }
    }

    /// Built-in themes followed by custom themes
    pub fn all(&self) -> Vec<Theme> {
        let mut themes: Vec<Theme> = self.builtin_themes.iter().cloned().collect();
        themes.extend(self.custom_themes.read().values().cloned());
        themes
    }

    pub fn list_builtin(&self) -> Vec<String> {
        self.builtin_themes.iter().map(|t| t.id.clone()).collect()
    }

    pub fn list_custom(&self) -> Vec<String> {
        self.custom_themes.read().keys().cloned().collect()
    }

    pub fn exists(&self, id: &str) -> bool {
        self.is_builtin(id) || self.is_custom(id)
    }

    pub fn is_builtin(&self, id: &str) -> bool {
        self.builtin_themes.iter().any(|t| t.id == id)
    }

    pub fn is_custom(&self, id: &str) -> bool {
        self.custom_themes.read().contains_key(id)
    }

    pub fn builtin_count(&self) -> usize {
        self.builtin_themes.len()
    }

    pub fn custom_count(&self) -> usize {
        self.custom_themes.read().len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("builtin_count", &self.builtin_count())
            .field("custom_count", &self.custom_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(id: &str) -> Theme {
        let mut theme = builtin::cosmic();
        theme.id = id.to_string();
        theme.name = format!("Custom {}", id);
        theme
    }

    #[test]
    fn test_registry_creation() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.builtin_count(), 3);
        assert_eq!(registry.custom_count(), 0);
        assert_eq!(registry.default_theme().id, builtin::SAINTVISION);
    }

    #[test]
    fn test_get_nonexistent_theme() {
        let registry = ThemeRegistry::new();
        assert!(registry.get("nonexistent-theme-xyz").is_none());
    }

    #[test]
    fn test_register_custom_theme() {
        let registry = ThemeRegistry::new();
        registry.register(custom("my-custom"));
        assert_eq!(registry.custom_count(), 1);
        assert!(registry.get("my-custom").is_some());
        assert!(registry.is_custom("my-custom"));
        assert!(!registry.is_builtin("my-custom"));
    }

    #[test]
    fn test_register_overwrites_by_id() {
        let registry = ThemeRegistry::new();
        registry.register(custom("mine"));
        let mut replacement = custom("mine");
        replacement.name = "Second".to_string();
        registry.register(replacement);

        assert_eq!(registry.custom_count(), 1);
        assert_eq!(registry.get("mine").unwrap().name, "Second");
    }

    #[test]
    fn test_builtin_wins_over_custom_with_same_id() {
        let registry = ThemeRegistry::new();
        let mut shadow = custom(builtin::NEON);
        shadow.name = "Impostor".to_string();
        registry.register(shadow);

        assert_eq!(registry.get(builtin::NEON).unwrap(), builtin::neon());
        assert!(registry.is_builtin(builtin::NEON));
        assert_eq!(registry.builtin_count(), 3);
    }

    #[test]
    fn test_all_lists_builtins_first() {
        let registry = ThemeRegistry::new();
        registry.register(custom("aaa"));
        let ids: Vec<_> = registry.all().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["saintvision", "cosmic", "neon", "aaa"]);
    }
}
