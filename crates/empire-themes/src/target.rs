//! Runtime style target
//!
//! The surface that actually renders applied tokens. The engine only ever
//! writes individual named properties; how they reach the screen is up to the
//! host (CSS custom properties, a native style sheet, a message bus).

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::types::Theme;

/// Prefix shared by every design token property
pub const TOKEN_PREFIX: &str = "--empire";

/// Writes a single design token
pub trait StyleTarget: Send + Sync {
    fn set_property(&self, name: &str, value: &str);
}

/// Token name/value pairs written when `theme` is applied, in write order.
///
/// Brand colors map to `--empire-<key>`, spacing to `--empire-spacing-<key>`,
/// shadows to `--empire-shadow-<key>`, followed by the two font families.
pub fn theme_tokens(theme: &Theme) -> Vec<(String, String)> {
    let mut tokens = Vec::with_capacity(7 + theme.spacing.len() + theme.shadows.len() + 2);

    for (key, value) in theme.brand.entries() {
        tokens.push((format!("{}-{}", TOKEN_PREFIX, key), value.to_string()));
    }
    for (key, value) in &theme.spacing {
        tokens.push((format!("{}-spacing-{}", TOKEN_PREFIX, key), value.clone()));
    }
    for (key, value) in &theme.shadows {
        tokens.push((format!("{}-shadow-{}", TOKEN_PREFIX, key), value.clone()));
    }
    tokens.push((
        format!("{}-font-family", TOKEN_PREFIX),
        theme.typography.font_family.clone(),
    ));
    tokens.push((
        format!("{}-heading-font", TOKEN_PREFIX),
        theme.typography.heading_font.clone(),
    ));

    tokens
}

/// Style target that records every property it receives
#[derive(Debug, Default)]
pub struct MemoryStyleTarget {
    properties: RwLock<BTreeMap<String, String>>,
}

impl MemoryStyleTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.properties.read().get(name).cloned()
    }

    pub fn properties(&self) -> BTreeMap<String, String> {
        self.properties.read().clone()
    }

    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.read().is_empty()
    }

    /// Render the recorded properties as a `:root` CSS block
    pub fn to_css(&self) -> String {
        let properties = self.properties.read();
        let mut css = String::from(":root {\n");
        for (name, value) in properties.iter() {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push('}');
        css
    }
}

impl StyleTarget for MemoryStyleTarget {
    fn set_property(&self, name: &str, value: &str) {
        self.properties
            .write()
            .insert(name.to_string(), value.to_string());
    }
}

/// Style target that discards everything, for headless hosts
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStyleTarget;

impl StyleTarget for NoopStyleTarget {
    fn set_property(&self, _name: &str, _value: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn test_token_names() {
        let theme = builtin::saintvision();
        let tokens: BTreeMap<_, _> = theme_tokens(&theme).into_iter().collect();

        assert_eq!(tokens.get("--empire-primary"), Some(&theme.brand.primary));
        assert_eq!(tokens.get("--empire-info"), Some(&theme.brand.info));
        assert_eq!(tokens.get("--empire-spacing-md"), theme.spacing.get("md"));
        assert_eq!(tokens.get("--empire-shadow-glow"), theme.shadows.get("glow"));
        assert_eq!(
            tokens.get("--empire-font-family"),
            Some(&theme.typography.font_family)
        );
        assert_eq!(
            tokens.get("--empire-heading-font"),
            Some(&theme.typography.heading_font)
        );
    }

    #[test]
    fn test_token_count() {
        let theme = builtin::neon();
        let expected = 7 + theme.spacing.len() + theme.shadows.len() + 2;
        assert_eq!(theme_tokens(&theme).len(), expected);
    }

    #[test]
    fn test_breakpoints_and_animations_not_written() {
        let theme = builtin::cosmic();
        assert!(theme_tokens(&theme)
            .iter()
            .all(|(name, _)| !name.contains("breakpoint") && !name.contains("animation")));
    }

    #[test]
    fn test_memory_target_css() {
        let target = MemoryStyleTarget::new();
        target.set_property("--empire-primary", "#d4af37");
        target.set_property("--empire-spacing-md", "1rem");
        assert_eq!(
            target.to_css(),
            ":root {\n  --empire-primary: #d4af37;\n  --empire-spacing-md: 1rem;\n}"
        );
    }
}
